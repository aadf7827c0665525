// ============================================================================
// VIEWMODELS - Screen state and user actions
// ============================================================================

pub mod list_viewmodel;
pub mod form_viewmodel;
pub mod screens;

pub use list_viewmodel::{ListController, MutationKind, PageMode, RefreshStrategy};
pub use form_viewmodel::{FieldKind, FieldSpec, FormController, FormSchema, Rule, SubmitStatus, ValidationError};
pub use screens::ResourceScreen;
