//! Integration tests for the interactive shell
//!
//! These tests drive whole scripted sessions through the menu loop and check
//! the printed transcript against the observable add/remove/view/update
//! contract.

use astro_schedule::schedule::{TaskEvent, TaskManager};
use astro_schedule::shell::Shell;
use std::cell::RefCell;
use std::io::Cursor;
use std::rc::Rc;

fn run_session_with(manager: TaskManager, script: &str) -> (String, TaskManager) {
    let mut shell = Shell::new(Cursor::new(script), Vec::new(), manager);
    shell.run().unwrap();
    let (output, manager) = shell.into_parts();
    (String::from_utf8(output).unwrap(), manager)
}

fn run_session(script: &str) -> (String, TaskManager) {
    run_session_with(TaskManager::new(), script)
}

#[test]
fn test_spacewalk_scenario_end_to_end() {
    // Add, view, partially update, view, remove, view, exit
    let script = "\
1
Spacewalk
2025-01-01 09:00
2025-01-01 11:00
High
3
4
Spacewalk

2025-01-01 10:00


3
2
Spacewalk
3
5
";
    let (output, manager) = run_session(script);

    // First listing shows the task exactly as entered
    assert!(output.contains("Task 1:"));
    assert!(output.contains("Description: Spacewalk"));
    assert!(output.contains("Start Time: 2025-01-01 09:00"));
    assert!(output.contains("End Time: 2025-01-01 11:00"));
    assert!(output.contains("Priority: High"));

    // After the partial update only the start time changed
    assert!(output.contains("Start Time: 2025-01-01 10:00"));
    let second_listing = &output[output.find("Start Time: 2025-01-01 10:00").unwrap()..];
    assert!(second_listing.contains("End Time: 2025-01-01 11:00"));
    assert!(second_listing.contains("Priority: High"));

    // After removal the listing is empty again
    assert!(output.contains("No tasks available."));
    assert!(output.contains("Exiting..."));
    assert!(manager.is_empty());
}

#[test]
fn test_add_prompts_match_the_menu_contract() {
    let (output, _) = run_session("1\nDock inspection\n2025-03-10 14:00\n2025-03-10 15:30\nMedium\n5\n");
    assert!(output.contains("Enter your choice (1-5): "));
    assert!(output.contains("Enter task description: "));
    assert!(output.contains("Enter start time (YYYY-MM-DD HH:MM): "));
    assert!(output.contains("Enter end time (YYYY-MM-DD HH:MM): "));
    assert!(output.contains("Enter priority (High/Medium/Low): "));
}

#[test]
fn test_add_is_all_or_nothing() {
    // Bad end time aborts the whole add even though the start parsed
    let (output, manager) =
        run_session("1\nSpacewalk\n2025-01-01 09:00\nlater\nHigh\n3\n5\n");
    assert!(output.contains("Invalid date format. Please use YYYY-MM-DD HH:MM."));
    assert!(output.contains("No tasks available."));
    assert!(manager.is_empty());
}

#[test]
fn test_update_reports_each_bad_field_but_applies_the_rest() {
    let script = "\
1
Spacewalk
2025-01-01 09:00
2025-01-01 11:00
High
4
Spacewalk

bogus
2025-01-01 12:00
Low
3
5
";
    let (output, manager) = run_session(script);
    assert!(output.contains("Invalid date format for start time."));
    assert!(!output.contains("Invalid date format for end time."));

    let task = &manager.tasks()[0];
    assert_eq!(task.priority, "Low");
    assert!(output.contains("Start Time: 2025-01-01 09:00"));
    assert!(output.contains("End Time: 2025-01-01 12:00"));
}

#[test]
fn test_remove_deletes_every_match_silently() {
    let script = "\
1
Checklist
2025-01-01 08:00
2025-01-01 09:00
Low
1
Checklist
2025-01-02 08:00
2025-01-02 09:00
Low
2
Checklist
3
2
Checklist
3
5
";
    let (output, manager) = run_session(script);

    // Both copies gone after one removal; removing again stays silent
    assert_eq!(output.matches("No tasks available.").count(), 2);
    assert!(!output.contains("Task not found."));
    assert!(manager.is_empty());
}

#[test]
fn test_end_before_start_is_accepted() {
    let (output, manager) =
        run_session("1\nBackwards\n2025-01-01 11:00\n2025-01-01 09:00\nLow\n3\n5\n");
    assert!(!output.contains("Invalid date format"));
    assert!(output.contains("Start Time: 2025-01-01 11:00"));
    assert!(output.contains("End Time: 2025-01-01 09:00"));
    assert_eq!(manager.len(), 1);
}

#[test]
fn test_subscribed_observer_sees_the_whole_session() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut manager = TaskManager::new();
    {
        let events = Rc::clone(&events);
        manager.subscribe(Box::new(move |event: &TaskEvent| {
            events.borrow_mut().push(event.clone());
        }));
    }

    let script = "\
1
Spacewalk
2025-01-01 09:00
2025-01-01 11:00
High
4
Spacewalk



Medium
2
Spacewalk
5
";
    let (_, manager) = run_session_with(manager, script);
    assert!(manager.is_empty());

    let events = events.borrow();
    assert_eq!(
        events.as_slice(),
        [
            TaskEvent::Added {
                description: "Spacewalk".to_string(),
            },
            TaskEvent::Updated {
                description: "Spacewalk".to_string(),
            },
            TaskEvent::Removed {
                description: "Spacewalk".to_string(),
                count: 1,
            },
        ]
    );
}
