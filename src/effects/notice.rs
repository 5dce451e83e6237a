//! Notifications and confirmation prompts shown to the user.

use crate::core::{Limit, Rejected};
use serde::{Deserialize, Serialize};

/// Severity/intent of a notification or prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
    Info,
    Question,
}

impl NoticeKind {
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Success => "✅",
            Self::Warning => "⚠️",
            Self::Error => "❌",
            Self::Info => "ℹ️",
            Self::Question => "❓",
        }
    }
}

/// Fire-and-forget message for the notification sink.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NoticeKind,
    pub title: String,
    pub text: String,
}

/// Yes/no question for the confirmation dialog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub kind: NoticeKind,
    pub title: String,
    pub text: String,
}

impl Notification {
    pub fn new(kind: NoticeKind, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            text: text.into(),
        }
    }

    pub fn limit_reached(rejected: &Rejected) -> Self {
        let bound = group_thousands(rejected.bound);
        let text = match rejected.limit {
            Limit::Upper => format!("El contador no puede exceder {bound}"),
            Limit::Lower => format!("El contador no puede ser menor a {bound}"),
        };
        Self::new(NoticeKind::Warning, "Límite alcanzado", text)
    }

    pub fn milestone(value: i64) -> Self {
        Self::new(
            NoticeKind::Success,
            "¡Milestone alcanzado!",
            format!("Has llegado a {value} conteos"),
        )
    }

    pub fn below_zero() -> Self {
        Self::new(
            NoticeKind::Info,
            "Valor negativo",
            "El contador ahora tiene un valor negativo",
        )
    }

    pub fn already_zero() -> Self {
        Self::new(
            NoticeKind::Info,
            "Ya está en cero",
            "El contador ya está reiniciado",
        )
    }

    pub fn reset_done() -> Self {
        Self::new(
            NoticeKind::Success,
            "¡Reiniciado!",
            "El contador ha sido restablecido a cero",
        )
    }

    pub fn nothing_to_clear() -> Self {
        Self::new(
            NoticeKind::Info,
            "Sin historial",
            "No hay acciones en el historial para limpiar",
        )
    }

    pub fn history_cleared() -> Self {
        Self::new(
            NoticeKind::Success,
            "¡Limpiado!",
            "El historial ha sido eliminado",
        )
    }
}

impl Prompt {
    pub fn confirm_reset(current: i64) -> Self {
        Self {
            kind: NoticeKind::Question,
            title: "¿Reiniciar contador?".to_string(),
            text: format!("Se perderá el valor actual: {current}"),
        }
    }

    pub fn confirm_clear(count: usize) -> Self {
        Self {
            kind: NoticeKind::Warning,
            title: "¿Limpiar historial?".to_string(),
            text: format!("Se eliminarán {count} registros"),
        }
    }
}

/// Format an integer with `,` between groups of three digits.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
