//! Shared Kernel
//!
//! Vocabulary shared by every quizboard crate:
//! - The unified error type ([`error::app_error::AppError`]) and its HTTP classification
//! - Typed identifiers for entities that cross crate boundaries
//!
//! Only things whose meaning is identical in every bounded context belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
