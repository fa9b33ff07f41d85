//! Tests de los cinco diálogos: identidad de paso ante entradas inválidas
//! y efectos terminales correctos.

use chrono::NaiveDate;
use gofit_core::{flows, FeedOutcome, WizardEffect, WizardEngine};
use gofit_domain::{DailyMenu, FoodDetail, Gender, Goal, Meal, MealType, User};

fn feed_all(engine: &mut WizardEngine, lines: &[&str]) -> Vec<FeedOutcome> {
    lines.iter().map(|l| engine.feed(l)).collect()
}

fn banana() -> FoodDetail {
    FoodDetail { fdc_id: 1102653,
                 name: "Banana, raw".into(),
                 calories: 89.0,
                 proteins: 1.1,
                 carbohydrates: 22.8,
                 lipids: 0.3 }
}

#[test]
fn new_user_collects_five_values_in_order() {
    let mut engine = WizardEngine::default();
    engine.start(flows::new_user());

    let outcomes = feed_all(&mut engine, &["Alice", "Doe", "30", "1"]);
    assert!(outcomes.iter().all(|o| matches!(o, FeedOutcome::Prompt(_))));

    match engine.feed("2") {
        FeedOutcome::Completed(WizardEffect::CreateUser { first_name, last_name, age, gender, goal }) => {
            assert_eq!(first_name, "Alice");
            assert_eq!(last_name, "Doe");
            assert_eq!(age, 30);
            assert_eq!(gender, Gender::Male);
            assert_eq!(goal, Goal::Maintenance);
        }
        other => panic!("expected completed wizard, got {other:?}"),
    }
    // El slot activo queda limpio tras el efecto terminal.
    assert!(!engine.is_active());
}

#[test]
fn negative_age_reprompts_once_then_proceeds() {
    let mut engine = WizardEngine::default();
    engine.start(flows::new_user());
    engine.feed("Alice");
    engine.feed("Doe");

    // Edad inválida: mismo paso re-armado, una sola vez.
    assert!(matches!(engine.feed("-5"), FeedOutcome::Rejected(_)));
    assert!(matches!(engine.feed("30"), FeedOutcome::Prompt(_)));
    assert!(matches!(engine.feed("1"), FeedOutcome::Prompt(_)));
    assert!(matches!(engine.feed("2"), FeedOutcome::Completed(WizardEffect::CreateUser { age: 30, .. })));
}

#[test]
fn new_meal_out_of_range_choice_keeps_step() {
    let mut engine = WizardEngine::default();
    let prompt = engine.start(flows::new_meal());
    assert!(prompt.contains("1. Breakfast"));
    assert!(prompt.contains("4. Snack"));

    // "5" sobre una lista de 4 opciones: error con el rango re-enunciado.
    match engine.feed("5") {
        FeedOutcome::Rejected(msg) => assert!(msg.contains("between 1 and 4")),
        other => panic!("expected rejection, got {other:?}"),
    }
    assert!(engine.is_active());

    // "1" mapea a la primera opción listada (Breakfast) y avanza a la
    // descripción.
    match engine.feed("1") {
        FeedOutcome::Prompt(p) => assert!(p.contains("description")),
        other => panic!("expected next prompt, got {other:?}"),
    }
    match engine.feed("Morning oats") {
        FeedOutcome::Completed(WizardEffect::CreateMeal { meal_type, description }) => {
            assert_eq!(meal_type, MealType::Breakfast);
            assert_eq!(description, "Morning oats");
        }
        other => panic!("expected completed wizard, got {other:?}"),
    }
}

#[test]
fn attach_food_validates_quantity() {
    let meals = vec![Meal::new(MealType::Breakfast, "Oats"), Meal::new(MealType::Lunch, "Pasta")];
    let expected = meals[1].clone();

    let mut engine = WizardEngine::default();
    let prompt = engine.start(flows::attach_food(banana(), meals));
    assert!(prompt.contains("1. Oats (Breakfast)"));

    engine.feed("2");
    assert!(matches!(engine.feed("-20"), FeedOutcome::Rejected(_)));
    assert!(matches!(engine.feed("zero"), FeedOutcome::Rejected(_)));
    match engine.feed("150") {
        FeedOutcome::Completed(WizardEffect::AttachFood { meal, food, grams }) => {
            assert_eq!(meal.id, expected.id);
            assert_eq!(food.fdc_id, 1102653);
            assert_eq!(grams, 150.0);
        }
        other => panic!("expected completed wizard, got {other:?}"),
    }
}

#[test]
fn new_menu_validates_date_format() {
    let users = vec![User::new("Alice", "Doe", 30, Gender::Female, Goal::Maintenance)];
    let expected_id = users[0].id;

    let mut engine = WizardEngine::default();
    engine.start(flows::new_menu(users));
    engine.feed("1");

    assert!(matches!(engine.feed("2024-03-12"), FeedOutcome::Rejected(_)));
    assert!(matches!(engine.feed("32/01/2024"), FeedOutcome::Rejected(_)));
    match engine.feed("12/03/2024") {
        FeedOutcome::Completed(WizardEffect::CreateMenu { user, date }) => {
            assert_eq!(user.id, expected_id);
            assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 12).unwrap());
        }
        other => panic!("expected completed wizard, got {other:?}"),
    }
}

#[test]
fn attach_meal_chains_two_choices() {
    let user = User::new("Alice", "Doe", 30, Gender::Female, Goal::Maintenance);
    let date = NaiveDate::from_ymd_opt(2024, 3, 12).unwrap();
    let menus = vec![DailyMenu::new(user, date)];
    let meals = vec![Meal::new(MealType::Dinner, "Stew")];
    let menu_id = menus[0].id;

    let mut engine = WizardEngine::default();
    let prompt = engine.start(flows::attach_meal(menus, meals));
    assert!(prompt.contains("Alice Doe - 12/03/2024"));

    match engine.feed("1") {
        FeedOutcome::Prompt(p) => assert!(p.contains("1. Stew (Dinner)")),
        other => panic!("expected meal choice prompt, got {other:?}"),
    }
    match engine.feed("1") {
        FeedOutcome::Completed(WizardEffect::AttachMeal { menu, meal }) => {
            assert_eq!(menu.id, menu_id);
            assert_eq!(meal.description, "Stew");
        }
        other => panic!("expected completed wizard, got {other:?}"),
    }
}
