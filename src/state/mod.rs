// ============================================================================
// STATE MODULE - Shared state with Rc<RefCell> + subscribers
// ============================================================================

pub mod reactivity;
pub mod session_state;
pub mod notification;
pub mod pagination;
pub mod filters;
pub mod route_guard;

pub use reactivity::ReactiveState;
pub use session_state::SessionState;
pub use notification::{Notification, NotificationView, ManualTimers, TimerHandle, TimerScheduler};
#[cfg(target_arch = "wasm32")]
pub use notification::GlooTimers;
pub use pagination::PaginationCursor;
pub use filters::PaymentFilter;
pub use route_guard::{AuthPhase, Resolution, Route, RouteGuard};
