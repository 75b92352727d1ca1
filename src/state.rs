use serde::{Deserialize, Serialize};

/// A recorded UI event binding waiting to wrap the next script statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventBinding {
    pub event_type: String,
    pub target_id: String,
}

/// Per-compilation registers carried across lines.
///
/// These replace the original's loose globals with one owned struct: the
/// pending style map, the pending event binding, the last-element reference,
/// and the generated-id counter. Pending values are consumed through
/// take-and-clear accessors so a value set by one line is used at most once.
#[derive(Debug, Default)]
pub struct Registers {
    styles: Vec<(String, String)>,
    event: Option<EventBinding>,
    last_element: Option<String>,
    generated_ids: u32,
}

impl Registers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next unique element id. Counting starts at 1 for every compilation.
    pub fn generate_id(&mut self) -> String {
        self.generated_ids += 1;
        format!("moe-ref-{}", self.generated_ids)
    }

    /// Merge one property into the pending style map. Re-assigning a
    /// property updates it in place, keeping first-assignment order.
    pub fn set_style(&mut self, property: &str, value: &str) {
        match self.styles.iter_mut().find(|(k, _)| k == property) {
            Some(slot) => slot.1 = value.to_string(),
            None => self
                .styles
                .push((property.to_string(), value.to_string())),
        }
    }

    /// Serialize and clear the pending style map: `"k:v;k2:v2;"`, or empty.
    pub fn take_styles(&mut self) -> String {
        let mut out = String::new();
        for (k, v) in self.styles.drain(..) {
            out.push_str(&k);
            out.push(':');
            out.push_str(&v);
            out.push(';');
        }
        out
    }

    /// Record an event binding against the most recently emitted element.
    /// Silent no-op when no element has been emitted yet.
    pub fn bind_event(&mut self, event_type: &str) {
        if let Some(target_id) = self.last_element.clone() {
            self.event = Some(EventBinding {
                event_type: event_type.to_string(),
                target_id,
            });
        }
    }

    pub fn take_event(&mut self) -> Option<EventBinding> {
        self.event.take()
    }

    /// Remember the id of the most recently emitted addressable element.
    pub fn note_element(&mut self, id: &str) {
        self.last_element = Some(id.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_start_at_one_and_increase() {
        let mut regs = Registers::new();
        assert_eq!(regs.generate_id(), "moe-ref-1");
        assert_eq!(regs.generate_id(), "moe-ref-2");
    }

    #[test]
    fn styles_serialize_in_order_and_clear() {
        let mut regs = Registers::new();
        regs.set_style("color", "red");
        regs.set_style("height", "10px");
        assert_eq!(regs.take_styles(), "color:red;height:10px;");
        assert_eq!(regs.take_styles(), "");
    }

    #[test]
    fn style_reassignment_updates_in_place() {
        let mut regs = Registers::new();
        regs.set_style("color", "red");
        regs.set_style("color", "blue");
        assert_eq!(regs.take_styles(), "color:blue;");
    }

    #[test]
    fn event_requires_a_last_element() {
        let mut regs = Registers::new();
        regs.bind_event("click");
        assert_eq!(regs.take_event(), None);

        regs.note_element("moe-ref-1");
        regs.bind_event("click");
        let evt = regs.take_event().unwrap();
        assert_eq!(evt.event_type, "click");
        assert_eq!(evt.target_id, "moe-ref-1");
        assert_eq!(regs.take_event(), None);
    }
}
