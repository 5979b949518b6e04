pub mod cards;
pub mod core;

pub use crate::{
    cards::{
        loader::{
            CardLoader,
            FileFetcher,
            HttpFetcher,
            ResourceFetcher,
            CARDS_RESOURCE,
        },
        to_cards,
        Card,
        JsonCardValue,
    },
    core::FlashdeckError,
};
