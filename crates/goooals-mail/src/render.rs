//! HTML email bodies for standard and external goals.

use serde::Serialize;
use tera::{Context, Tera};

use goooals_core::attributes::OrdinalAttribute;
use goooals_core::display::{
    NOT_SPECIFIED, display_flag, display_number, display_tags, display_text,
};
use goooals_core::models::external::ExternalGoal;
use goooals_core::models::goal_item::GoalItem;
use goooals_core::models::goal_type::GoalPayload;
use goooals_core::models::standard::StandardGoal;

use crate::error::MailError;
use crate::highlight::highlight_numbers;

const STANDARD_TEMPLATE: &str = include_str!("../templates/standard_goal.html");
const EXTERNAL_TEMPLATE: &str = include_str!("../templates/external_goal.html");

const SUBJECT_PREFIX: &str = "Goooooals: ";

#[derive(Serialize)]
struct AttributeView {
    icon: &'static str,
    name: String,
    label: String,
    description: String,
}

#[derive(Serialize)]
struct StandardView {
    title: String,
    attributes: Vec<AttributeView>,
    category: String,
    tags: String,
    motivation: String,
    subgoals: Vec<String>,
    criteria: Vec<String>,
}

#[derive(Serialize)]
struct FieldView {
    icon: &'static str,
    name: &'static str,
    value: String,
}

#[derive(Serialize)]
struct ExternalView {
    title: String,
    fields: Vec<FieldView>,
}

/// Render a goal of either type into its HTML email body.
pub fn format_goal_email(payload: &GoalPayload) -> Result<String, MailError> {
    match payload {
        GoalPayload::Standard(goal) => format_standard_goal_email(goal),
        GoalPayload::External(goal) => format_external_goal_email(goal),
    }
}

pub fn email_subject(payload: &GoalPayload) -> String {
    format!("{SUBJECT_PREFIX}{}", display_text(payload.title()))
}

pub fn format_standard_goal_email(goal: &StandardGoal) -> Result<String, MailError> {
    // Duration first, then frequency and difficulty.
    let attributes = [
        (OrdinalAttribute::Duration, "⌛"),
        (OrdinalAttribute::Frequency, "📅"),
        (OrdinalAttribute::Difficulty, "🎚️"),
    ]
    .into_iter()
    .map(|(attribute, icon)| {
        let (label, description) = match goal.attribute(attribute) {
            Some(d) => (d.label.to_string(), d.description.to_string()),
            None => (NOT_SPECIFIED.to_string(), NOT_SPECIFIED.to_string()),
        };
        AttributeView {
            icon,
            name: attribute.to_string(),
            label,
            description,
        }
    })
    .collect();

    let view = StandardView {
        title: display_text(goal.goal.as_deref()),
        attributes,
        category: display_text(goal.category.as_deref()),
        tags: display_tags(goal.tags.as_deref()),
        motivation: display_text(goal.motivation.as_deref()),
        subgoals: highlight_items(goal.subgoals()),
        criteria: highlight_items(goal.criteria()),
    };

    render("standard_goal.html", STANDARD_TEMPLATE, &view)
}

pub fn format_external_goal_email(goal: &ExternalGoal) -> Result<String, MailError> {
    let fields = vec![
        field("🕙", "Availability", display_number(goal.availability)),
        field("👪", "Participants", display_number(goal.participants)),
        field("💰", "Price", display_number(goal.price)),
        field("🔡", "Type", display_text(goal.kind.as_deref())),
        field("♿", "Accessibility", display_text(goal.accessibility.as_deref())),
        field("⏳", "Duration", display_text(goal.duration.as_deref())),
        field("👶", "Kid Friendly", display_flag(goal.kid_friendly)),
        field("🔗", "Link", display_text(goal.link.as_deref())),
    ];

    let view = ExternalView {
        title: display_text(goal.activity.as_deref()),
        fields,
    };

    render("external_goal.html", EXTERNAL_TEMPLATE, &view)
}

fn field(icon: &'static str, name: &'static str, value: String) -> FieldView {
    FieldView { icon, name, value }
}

fn highlight_items(items: &[GoalItem]) -> Vec<String> {
    items
        .iter()
        .map(|item| highlight_numbers(&display_text(item.description.as_deref())))
        .collect()
}

/// Render a Tera template against a serializable view. Template names end in
/// `.html`, so every interpolation is escaped unless marked `safe`.
fn render<T: Serialize>(name: &str, content: &str, view: &T) -> Result<String, MailError> {
    let mut tera = Tera::default();
    tera.add_raw_template(name, content)
        .map_err(|e| MailError::TemplateParse(e.to_string()))?;

    let context = Context::from_serialize(view)?;
    let rendered = tera.render(name, &context)?;
    Ok(rendered)
}
