use thiserror::Error;

use crate::core::action::ActionKind;

/// Errors returned by engine transitions. The state is unchanged whenever
/// one of these is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("the deck is empty")]
    DeckEmpty,

    #[error("{0} is not allowed right now")]
    NotAllowed(ActionKind),

    #[error("no card on the table to guess against")]
    NoReferenceCard,
}
