pub mod record;
pub mod envelope;
pub mod draft;
pub mod session;
pub mod catalog;
pub mod website;
pub mod bounty;
pub mod sales;

pub use record::{RecordId, Resource};
pub use envelope::Envelope;
pub use draft::{Draft, FieldValue, FileUpload};
pub use session::{LoginRequest, LoginResponse};
pub use catalog::*;
pub use website::*;
pub use bounty::*;
pub use sales::*;
