//! Library error type

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The publisher has no free subscriber slot left.
    #[error("subscriber limit of {0} reached")]
    SubscriberLimit(usize),
}
