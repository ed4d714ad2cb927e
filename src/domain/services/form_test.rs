use super::*;
use crate::domain::services::seed::{demo_cards, team};

fn form(title: &str) -> CardForm {
    CardForm {
        title: title.to_string(),
        ..CardForm::default()
    }
}

#[test]
fn blank_form_defaults() {
    let form = CardForm::default();
    assert_eq!(form.priority, Priority::Medium);
    assert_eq!(form.background_color, "#ffffff");
    assert!(form.due_date.is_empty());
}

#[test]
fn whitespace_title_is_rejected() {
    assert!(matches!(form("   ").validate(&team()), Err(BoardError::EmptyTitle)));
}

#[test]
fn minimal_form_produces_default_draft() {
    let draft = form("  Ship it  ").validate(&team()).unwrap();
    assert_eq!(draft.title, "Ship it");
    assert_eq!(draft.description, "");
    assert_eq!(draft.priority, Priority::Medium);
    assert_eq!(draft.due_date, None);
    assert_eq!(draft.assignee, None);
    assert!(draft.labels.is_empty());
    assert_eq!(draft.background_color.as_deref(), Some("#ffffff"));
}

#[test]
fn due_date_must_be_iso() {
    let mut f = form("Plan");
    f.due_date = "2024-02-30".to_string();
    assert!(matches!(f.validate(&team()), Err(BoardError::InvalidDueDate(_))));

    f.due_date = "2024-02-29".to_string();
    let draft = f.validate(&team()).unwrap();
    assert_eq!(draft.due_date, NaiveDate::from_ymd_opt(2024, 2, 29));
}

#[test]
fn color_must_be_hex() {
    let mut f = form("Plan");
    f.background_color = "tomato".to_string();
    assert!(matches!(f.validate(&team()), Err(BoardError::InvalidColor(_))));

    f.background_color = "#+1+2+3".to_string();
    assert!(matches!(f.validate(&team()), Err(BoardError::InvalidColor(_))));
}

#[test]
fn description_is_kept_as_typed() {
    let mut f = form("  Plan  ");
    f.description = "  indented notes\n".to_string();
    let draft = f.validate(&team()).unwrap();
    assert_eq!(draft.title, "Plan");
    assert_eq!(draft.description, "  indented notes\n");
}

#[test]
fn assignee_is_resolved_from_roster() {
    let mut f = form("Plan");
    f.assignee_id = "3".to_string();
    let draft = f.validate(&team()).unwrap();
    assert_eq!(draft.assignee.map(|a| a.name).as_deref(), Some("Carol Davis"));

    f.assignee_id = "99".to_string();
    assert!(matches!(f.validate(&team()), Err(BoardError::UnknownAssignee(_))));
}

#[test]
fn labels_are_trimmed_and_deduplicated() {
    assert_eq!(
        parse_labels(" Backend, ,Frontend,Backend ,  "),
        vec!["Backend".to_string(), "Frontend".to_string()]
    );
    assert!(parse_labels("").is_empty());
}

#[test]
fn edit_form_round_trips_existing_card() {
    let card = demo_cards().remove(0);
    let form = CardForm::from_card(&card);
    assert_eq!(form.due_date, "2024-01-15");
    assert_eq!(form.labels, "Design, Frontend");
    assert_eq!(form.assignee_id, "1");

    let draft = form.validate(&team()).unwrap();
    assert_eq!(draft.title, card.title);
    assert_eq!(draft.labels, card.labels);
    assert_eq!(draft.due_date, card.due_date);
    assert_eq!(draft.assignee, card.assignee);
    assert_eq!(draft.background_color, card.background_color);
}
