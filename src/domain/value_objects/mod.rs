//! Value Objects
//!
//! Immutable message types exchanged with the collaborators.

mod selection;

pub use selection::{
    CollectionRef, CreateRequest, CreateResponse, CurrentSelection, Field, SelectRequest,
    SelectResponse, SelectedTarget,
};
