// ===== TOAST AND MODAL STATE MACHINES =====

/// Which notice the toast is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastKind {
    Copied,
    CopyFailed,
}

impl ToastKind {
    pub fn message(self) -> &'static str {
        match self {
            ToastKind::Copied => "CSSをクリップボードにコピーしました",
            ToastKind::CopyFailed => "コピーできませんでした。CSSを手動でコピーしてください",
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, ToastKind::Copied)
    }
}

/// `Hidden -> Visible -> (deadline) -> Hidden`. Showing again while visible
/// moves the deadline instead of queuing a second toast.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ToastState {
    #[default]
    Hidden,
    Visible { kind: ToastKind, deadline_ms: f64 },
}

impl ToastState {
    pub fn show(kind: ToastKind, now_ms: f64, duration_ms: u32) -> Self {
        ToastState::Visible {
            kind,
            deadline_ms: now_ms + f64::from(duration_ms),
        }
    }

    /// Hides the toast once its deadline has passed; a deadline moved by a
    /// later `show` keeps it visible.
    pub fn expire(self, now_ms: f64) -> Self {
        match self {
            ToastState::Visible { deadline_ms, .. } if now_ms >= deadline_ms => ToastState::Hidden,
            other => other,
        }
    }

    pub fn remaining_ms(self, now_ms: f64) -> Option<u32> {
        match self {
            ToastState::Hidden => None,
            ToastState::Visible { deadline_ms, .. } => {
                Some((deadline_ms - now_ms).max(0.0).ceil() as u32)
            }
        }
    }

    pub fn visible_kind(self) -> Option<ToastKind> {
        match self {
            ToastState::Hidden => None,
            ToastState::Visible { kind, .. } => Some(kind),
        }
    }
}

/// Result of an export attempt, by the path that succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Clipboard,
    LegacyFallback,
    Failed(String),
}

impl CopyOutcome {
    pub fn toast_kind(&self) -> ToastKind {
        match self {
            CopyOutcome::Clipboard | CopyOutcome::LegacyFallback => ToastKind::Copied,
            CopyOutcome::Failed(_) => ToastKind::CopyFailed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalKind {
    Informational,
    Policy,
}

impl ModalKind {
    pub fn title(self) -> &'static str {
        match self {
            ModalKind::Informational => "KumiFontについて",
            ModalKind::Policy => "プライバシーポリシー",
        }
    }
}

/// `Closed -> Open(kind) -> Closed`. Opening another kind replaces the
/// current dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open(ModalKind),
}

impl ModalState {
    pub fn open(kind: ModalKind) -> Self {
        ModalState::Open(kind)
    }

    pub fn kind(self) -> Option<ModalKind> {
        match self {
            ModalState::Closed => None,
            ModalState::Open(kind) => Some(kind),
        }
    }
}
