//! Errors surfaced by shop operations
//!
//! Every variant is recoverable: the front end renders it and carries on.

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShopError {
    /// Sub id or inventory product number not recognized.
    #[error("unknown product: {0}")]
    UnknownProduct(String),
    /// Size name not on the menu.
    #[error("unknown size: {0}")]
    UnknownSize(String),
    /// An ingredient or extra lacks the quantity needed.
    #[error("not enough stock of {item} to {purpose}")]
    InsufficientStock { item: String, purpose: String },
    /// Quantity is not a non-negative decimal.
    #[error("invalid quantity: {0:?}")]
    InvalidQuantity(String),
    /// A price or stock total would not fit in a decimal.
    #[error("amount out of range to {0}")]
    AmountOutOfRange(String),
    #[error("not enough cash: need ${cost:.2}, have ${cash:.2}")]
    InsufficientFunds { cost: Decimal, cash: Decimal },
    #[error("save file not found: {0}")]
    SaveNotFound(String),
    /// Snapshot exists but holds values that cannot be restored.
    #[error("corrupt save: {0}")]
    CorruptSave(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ShopError {
    /// Short kind name for logs and tallies
    pub fn kind(&self) -> &'static str {
        match self {
            ShopError::UnknownProduct(_) => "UnknownProduct",
            ShopError::UnknownSize(_) => "UnknownSize",
            ShopError::InsufficientStock { .. } => "InsufficientStock",
            ShopError::InvalidQuantity(_) => "InvalidQuantity",
            ShopError::AmountOutOfRange(_) => "AmountOutOfRange",
            ShopError::InsufficientFunds { .. } => "InsufficientFunds",
            ShopError::SaveNotFound(_) => "SaveNotFound",
            ShopError::CorruptSave(_) => "CorruptSave",
            ShopError::Io(_) => "Io",
            ShopError::Json(_) => "Json",
        }
    }
}

/// A supplier record block that was dropped during parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSkip {
    /// Zero-based line index where the block started
    pub line: usize,
    pub reason: String,
}
