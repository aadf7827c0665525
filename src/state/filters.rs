// Client-side filters applied to already-loaded lists.

use crate::models::Sale;

/// Case-insensitive substring match; an empty needle matches everything
pub fn matches_search(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// True if any of `fields` matches
pub fn any_field_matches(fields: &[&str], needle: &str) -> bool {
    needle.trim().is_empty() || fields.iter().any(|field| matches_search(field, needle))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaymentFilter {
    #[default]
    Paid,
    Unpaid,
}

impl PaymentFilter {
    pub fn accepts(&self, sale: &Sale) -> bool {
        match self {
            PaymentFilter::Paid => sale.is_paid(),
            PaymentFilter::Unpaid => !sale.is_paid(),
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            PaymentFilter::Paid => PaymentFilter::Unpaid,
            PaymentFilter::Unpaid => PaymentFilter::Paid,
        }
    }
}
