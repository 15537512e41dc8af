use chrono::NaiveDate;
use personform_core::{Person, PersonViewModel, RelayCommand};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

fn ann_lee_view_model() -> PersonViewModel {
    let person = Person::new_as_of(
        "Ann",
        "Lee",
        "ann@example.com",
        date(2000, 1, 1),
        date(2024, 6, 1),
    )
    .expect("reference person should validate");
    PersonViewModel::new(person)
}

#[test]
fn command_updates_view_model_through_shared_state() {
    let view_model = Rc::new(RefCell::new(ann_lee_view_model()));
    let target = Rc::clone(&view_model);
    let last_error = Rc::new(RefCell::new(None));
    let error_sink = Rc::clone(&last_error);

    let apply_email = RelayCommand::new(move |value: &String| {
        if let Err(err) = target.borrow_mut().set_email(value.as_str()) {
            *error_sink.borrow_mut() = Some(err);
        }
    });

    apply_email.execute(&"ann.lee@example.org".to_string());
    assert!(last_error.borrow().is_none());
    assert_eq!(view_model.borrow().email(), "ann.lee@example.org");

    apply_email.execute(&"not-an-email".to_string());
    assert!(last_error.borrow().is_some());
    assert_eq!(view_model.borrow().email(), "ann.lee@example.org");
}

#[test]
fn guard_tracks_view_model_state_between_requeries() {
    let view_model = Rc::new(RefCell::new(ann_lee_view_model()));
    let guard_source = Rc::clone(&view_model);

    // Saving is only allowed while the record names an adult.
    let save = RelayCommand::with_guard(
        |_: &()| {},
        move |_| guard_source.borrow().is_adult_as_of(date(2024, 6, 1)),
    );
    assert!(save.can_execute(&()));

    view_model
        .borrow_mut()
        .set_birth_date_as_of(date(2010, 1, 1), date(2024, 6, 1))
        .expect("valid birth date should be stored");
    assert!(!save.can_execute(&()));
}

#[test]
fn explicit_requery_drives_bound_control_refresh() {
    let enabled = Rc::new(Cell::new(false));
    let guard_state = Rc::clone(&enabled);
    let mut save = RelayCommand::with_guard(|_: &()| {}, move |_| guard_state.get());

    // Stand-in for a bound control's refresh counter.
    let refreshes = Rc::new(Cell::new(0u32));
    let refresh_counter = Rc::clone(&refreshes);
    let subscription = save.subscribe_can_execute_changed(move || {
        refresh_counter.set(refresh_counter.get() + 1);
    });

    assert!(!save.can_execute(&()));
    enabled.set(true);
    save.raise_can_execute_changed();
    assert_eq!(refreshes.get(), 1);
    assert!(save.can_execute(&()));

    assert!(save.unsubscribe_can_execute_changed(subscription));
    save.raise_can_execute_changed();
    assert_eq!(refreshes.get(), 1);
}
