// ============================================================================
// DASHBOARD SERVICE - Purchases per course for the overview chart
// ============================================================================

use serde::Serialize;

use crate::models::Purchase;

/// One bar of the purchases chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoursePurchases {
    pub course: String,
    pub purchases: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PurchaseSummary {
    pub per_course: Vec<CoursePurchases>,
    pub total: u32,
}

/// Count purchases per course name, keeping the order courses first appear in
pub fn aggregate(purchases: &[Purchase]) -> PurchaseSummary {
    let mut per_course: Vec<CoursePurchases> = Vec::new();
    for purchase in purchases {
        match per_course.iter_mut().find(|row| row.course == purchase.course_name) {
            Some(row) => row.purchases += 1,
            None => per_course.push(CoursePurchases {
                course: purchase.course_name.clone(),
                purchases: 1,
            }),
        }
    }
    let total = per_course.iter().map(|row| row.purchases).sum();
    PurchaseSummary { per_course, total }
}
