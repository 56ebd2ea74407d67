//! Identity of the running process.

use serde::Serialize;

/// User id the service runs as, and what that means for policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProcessIdentity {
    pub user_id: u32,
}

impl ProcessIdentity {
    pub fn new(user_id: u32) -> Self {
        Self { user_id }
    }

    /// Identity of the current process.
    #[cfg(unix)]
    pub fn current() -> Self {
        // SAFETY: getuid has no preconditions and cannot fail.
        let uid = unsafe { libc::getuid() };
        Self::new(uid)
    }

    pub fn is_root(&self) -> bool {
        self.user_id == 0
    }

    /// Human-readable root access status.
    pub fn root_status(&self) -> &'static str {
        if self.is_root() {
            "ENABLED (INSECURE)"
        } else {
            "DISABLED (SECURE)"
        }
    }

    /// CSS class used to highlight the status on the demo page.
    pub fn css_class(&self) -> &'static str {
        if self.is_root() {
            "danger"
        } else {
            "secure"
        }
    }
}
