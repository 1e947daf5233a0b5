//! # Domain Types
//!
//! Core domain types shared by the catalog, the cart store and checkout.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      Size       │   │    TaxRate      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (slug)      │   │  XS  S  M       │   │  bps (u32)      │       │
//! │  │  name           │   │  L   XL XXL     │   │  800 = 8%       │       │
//! │  │  price (Money)  │   └─────────────────┘   └─────────────────┘       │
//! │  │  image          │                                                    │
//! │  │  category       │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Products are identified by `id`, a stable kebab-case slug such as
//! `"signature-hoodie"`. Two products may share a display name; they never
//! share an id.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 800 bps = 8%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for config convenience).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog entry. Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Stable identifier (kebab-case slug). The cart and wishlist key on it.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Unit price.
    pub price: Money,

    /// Opaque image reference (bundled asset path or URL).
    pub image: String,

    /// Display label such as `NEW` or `LIMITED`.
    pub category: String,

    /// Long-form copy for the detail view. Serialized as `null` when absent;
    /// may be omitted on input.
    #[serde(default)]
    pub description: Option<String>,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Money,
        image: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            price,
            image: image.into(),
            category: category.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

// =============================================================================
// Size
// =============================================================================

/// Garment sizes offered on the product detail view.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum Size {
    #[serde(rename = "XS")]
    ExtraSmall,
    #[serde(rename = "S")]
    Small,
    /// The size preselected when a detail view opens.
    #[default]
    #[serde(rename = "M")]
    Medium,
    #[serde(rename = "L")]
    Large,
    #[serde(rename = "XL")]
    ExtraLarge,
    #[serde(rename = "XXL")]
    DoubleExtraLarge,
}

impl Size {
    /// Every size, smallest first (display order of the size picker).
    pub const ALL: [Size; 6] = [
        Size::ExtraSmall,
        Size::Small,
        Size::Medium,
        Size::Large,
        Size::ExtraLarge,
        Size::DoubleExtraLarge,
    ];

    /// Short label, as printed on the size picker and in the cart.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Size::ExtraSmall => "XS",
            Size::Small => "S",
            Size::Medium => "M",
            Size::Large => "L",
            Size::ExtraLarge => "XL",
            Size::DoubleExtraLarge => "XXL",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Size::ALL
            .into_iter()
            .find(|size| size.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::UnknownSize(s.to_string()))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
