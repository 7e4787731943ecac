//! Form rendering shared by page forms and modals.

use crate::tui::state::FormState;

use super::text_truncate::truncate_to_width;

/// Context for rendering a form.
#[derive(Debug, Clone)]
pub struct FormViewContext<'a> {
    /// Form to draw.
    pub form: &'a FormState,
    /// Whether key presses currently edit this form.
    pub active: bool,
    /// Available width in columns.
    pub max_width: usize,
}

/// Component for displaying a form.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormComponent;

impl FormComponent {
    /// Renders the form title, its fields and the submit hint.
    ///
    /// The focused field of an active form is marked with `>` and a caret.
    #[must_use]
    pub fn view(ctx: &FormViewContext<'_>) -> String {
        let kind = ctx.form.kind();
        let mut output = format!("  {}\n", kind.title());

        for (index, field) in ctx.form.fields().iter().enumerate() {
            let focused = ctx.active && index == ctx.form.focus();
            let marker = if focused { ">" } else { " " };
            let caret = if focused { "_" } else { "" };
            let line = format!(
                "{marker} {}: {}{caret}",
                field.label,
                field.display_value()
            );
            output.push_str(&truncate_to_width(&line, ctx.max_width));
            output.push('\n');
        }

        let hint = if ctx.active {
            format!("  [Enter] {}  [Tab] next field  [Esc] cancel", kind.submit_label())
        } else {
            format!("  [Enter] edit form ({})", kind.submit_label())
        };
        output.push_str(&truncate_to_width(&hint, ctx.max_width));
        output.push('\n');
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_form_marks_focused_field() {
        let mut form = FormState::login();
        form.insert_char('a');
        let output = FormComponent::view(&FormViewContext {
            form: &form,
            active: true,
            max_width: 80,
        });

        assert!(output.contains("> Email: a_"));
        assert!(output.contains("  Password: "));
        assert!(output.contains("[Enter] Login"));
    }

    #[test]
    fn inactive_form_has_no_caret() {
        let form = FormState::contact();
        let output = FormComponent::view(&FormViewContext {
            form: &form,
            active: false,
            max_width: 80,
        });

        assert!(!output.contains('_'));
        assert!(output.contains("[Enter] edit form (Send Message)"));
    }
}
