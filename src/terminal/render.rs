//! Plain-text rendering of the counter panel and history.
//!
//! Everything here is pure string building. Styling and printing happen in
//! the terminal environment and the binary.

use crate::core::{Action, HistoryRecord, Standing};
use crate::effects::{group_thousands, Notification, Session};
use chrono::Local;
use std::fmt::Write;

/// Display label and icon for each recorded action.
pub fn action_label(action: Action) -> (&'static str, &'static str) {
    match action {
        Action::Increment => ("Incremento", "➕"),
        Action::Decrement => ("Decremento", "➖"),
        Action::Reset => ("Reinicio", "🔄"),
    }
}

pub fn standing_label(standing: Standing) -> &'static str {
    match standing {
        Standing::Initial => "Inicial",
        Standing::Positive => "Positivo",
        Standing::Negative => "Negativo",
    }
}

pub fn notice(notification: &Notification) -> String {
    format!(
        "{} {}\n   {}",
        notification.kind.icon(),
        notification.title,
        notification.text
    )
}

/// The counter panel: value, standing badge, and action count.
pub fn panel(session: &Session) -> String {
    let counter = session.counter();
    let mut out = String::new();
    let _ = writeln!(out, "📊 Panel de Conteo");
    let _ = writeln!(out, "   {}", group_thousands(counter.value()));
    let _ = writeln!(out, "   Eventos registrados");
    let _ = write!(
        out,
        "   Estado: {}   Acciones: {}",
        standing_label(counter.standing()),
        session.history().len()
    );
    out
}

pub fn record(record: &HistoryRecord) -> String {
    let (label, icon) = action_label(record.action);
    let time = record.timestamp.with_timezone(&Local).format("%H:%M:%S");
    format!(
        "{icon} {label:<10} Valor: {:>8}   🕐 {time}",
        group_thousands(record.resulting_value)
    )
}

/// The recent history view, with the empty state and truncation footer.
pub fn history(session: &Session) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "📝 Historial de Acciones");

    let log = session.history();
    if log.is_empty() {
        let _ = writeln!(out, "   📥 No hay acciones registradas aún");
        let _ = write!(
            out,
            "   Las acciones aparecerán aquí cuando uses los botones"
        );
        return out;
    }

    let recent = session.recent();
    let lines: Vec<String> = recent.iter().map(|r| format!("   {}", record(r))).collect();
    out.push_str(&lines.join("\n"));

    if log.len() > session.recent_len() {
        let _ = write!(
            out,
            "\n   ℹ️ Mostrando las últimas {} acciones de {} totales",
            session.recent_len(),
            log.len()
        );
    }
    out
}
