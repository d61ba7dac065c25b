// End-to-end calculator scenarios, driven through the keypad by button name

use calctty::config::Config;
use calctty::ui::App;

fn app() -> App {
    App::new(&Config::default())
}

fn click_all(app: &mut App, names: &[&str]) {
    for name in names {
        assert!(app.click(name), "no button named {:?}", name);
    }
}

#[test]
fn test_initial_display_is_zero() {
    assert_eq!(app().display(), "0");
}

#[test]
fn test_addition() {
    let mut app = app();
    click_all(&mut app, &["2", "add", "3", "equals"]);
    assert_eq!(app.display(), "5");
}

#[test]
fn test_division_with_fraction() {
    let mut app = app();
    click_all(&mut app, &["7", "divide", "2", "equals"]);
    assert_eq!(app.display(), "3.5");
}

#[test]
fn test_float_noise_is_rounded_away() {
    let mut app = app();
    click_all(
        &mut app,
        &["0", "decimal", "1", "add", "0", "decimal", "2", "equals"],
    );
    assert_eq!(app.display(), "0.3");
}

#[test]
fn test_division_by_zero_shows_error() {
    let mut app = app();
    click_all(&mut app, &["7", "divide", "0", "equals"]);
    assert_eq!(app.display(), "Error");

    // Any digit starts over
    click_all(&mut app, &["4"]);
    assert_eq!(app.display(), "4");
}

#[test]
fn test_percent() {
    let mut app = app();
    click_all(&mut app, &["all clear", "5", "0", "percent"]);
    assert_eq!(app.display(), "0.5");
}

#[test]
fn test_backspace_deletes_last_digit() {
    let mut app = app();
    click_all(&mut app, &["all clear", "1", "2", "3", "backspace"]);
    assert_eq!(app.display(), "12");
}

#[test]
fn test_clear_entry_then_clear_all() {
    let mut app = app();
    click_all(&mut app, &["all clear", "1", "2", "add", "3", "clear entry"]);
    assert_eq!(app.display(), "0");

    click_all(&mut app, &["4", "equals"]);
    assert_eq!(app.display(), "16");

    click_all(&mut app, &["all clear"]);
    assert_eq!(app.display(), "0");
}

#[test]
fn test_chain_without_precedence() {
    // 2 + 3 × 4 evaluates left to right: (2 + 3) × 4
    let mut app = app();
    click_all(&mut app, &["2", "add", "3", "multiply"]);
    assert_eq!(app.display(), "5");
    click_all(&mut app, &["4", "equals"]);
    assert_eq!(app.display(), "20");
}

#[test]
fn test_labels_work_as_names() {
    let mut app = app();
    click_all(&mut app, &["9", "−", "1", "2", "="]);
    assert_eq!(app.display(), "-3");
    click_all(&mut app, &["±"]);
    assert_eq!(app.display(), "3");
}

#[test]
fn test_long_results_are_truncated() {
    let mut app = app();
    click_all(&mut app, &["2", "divide", "3", "equals"]);
    assert_eq!(app.display(), "0.6666666666");

    let mut app = self::app();
    click_all(
        &mut app,
        &["9", "9", "9", "9", "9", "9", "multiply", "9", "9", "9", "9", "9", "9", "9", "equals"],
    );
    // 9999989000001 rounds to 12 significant digits, then loses a digit to the length limit
    assert_eq!(app.display(), "999998900000");
}
