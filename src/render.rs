use crate::dates::format_display;
use crate::intent::processor::Response;
use crate::meal_planner::models::{DailyPlan, Recipe, WeeklyPlan};

const WEEKDAY_NAMES: [&str; 7] = [
    "Ponedeljak",
    "Utorak",
    "Sreda",
    "Četvrtak",
    "Petak",
    "Subota",
    "Nedelja",
];

/// Turns a routed result into the text shown to the user.
pub fn format_response(response: &Response) -> String {
    match response {
        Response::General { message } => message.clone(),
        Response::MealPlanDaily { plan } => format_daily_plan(plan),
        Response::MealPlanWeekly { plan } => format_weekly_plan(plan),
        Response::MessageDraft { draft } => format!(
            "Predlog odgovora za {}:\n\n{}",
            draft.sender, draft.draft_response
        ),
    }
}

fn format_daily_plan(plan: &DailyPlan) -> String {
    let mut out = format!("Evo predloga za {}:\n", format_display(plan.date));

    if plan.meals.is_empty() {
        out.push_str("Nema dostupnih predloga za taj dan.");
        return out;
    }

    for slot in &plan.meals {
        match &slot.recipe {
            Some(recipe) => {
                out.push_str(&format!("\n===== {} =====\n", slot.meal_type.to_uppercase()));
                out.push_str(&format_recipe(recipe));
            }
            None => out.push_str(&format!("\n{}: Nema predloga.", capitalize(&slot.meal_type))),
        }
    }

    out
}

fn format_weekly_plan(plan: &WeeklyPlan) -> String {
    if plan.is_empty() {
        return "Nema dostupnih predloga za nedelju.".into();
    }

    let mut out = String::from("Nedeljni plan obroka:\n\n");

    for daily in plan.values() {
        let day_name = WEEKDAY_NAMES[usize::from(daily.date.weekday().number_days_from_monday())];
        out.push_str(&format!(
            "--- {} ({}) ---\n",
            day_name,
            format_display(daily.date)
        ));

        for slot in &daily.meals {
            match &slot.recipe {
                Some(recipe) => {
                    out.push_str(&format!("{}: {}\n", capitalize(&slot.meal_type), recipe.name))
                }
                None => {
                    out.push_str(&format!("{}: Nema predloga\n", capitalize(&slot.meal_type)))
                }
            }
        }

        out.push('\n');
    }

    out.push_str("Za detalje o receptu, pitajte za konkretan dan i obrok.");
    out
}

fn format_recipe(recipe: &Recipe) -> String {
    let nutrition = recipe
        .nutritional_info
        .as_ref()
        .map(|n| {
            format!(
                "{}KCAL; {}P, {}UH, {}M",
                n.calories, n.proteins, n.carbs, n.fats
            )
        })
        .unwrap_or_default();

    let underline = "=".repeat(recipe.name.chars().count());

    let ingredients = recipe
        .ingredients
        .iter()
        .map(|ingredient| format!("• {ingredient}"))
        .collect::<Vec<_>>()
        .join("\n");

    let instructions = recipe
        .instructions
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {}", i + 1, step))
        .collect::<Vec<_>>()
        .join("\n");

    let mut sections = String::new();
    for (name, items) in &recipe.additional_sections {
        sections.push_str(&format!("\n\n{name}:\n"));
        sections.push_str(
            &items
                .iter()
                .map(|item| format!("• {item}"))
                .collect::<Vec<_>>()
                .join("\n"),
        );
    }

    format!(
        "\n{}\n{}\n{}\n\nSASTOJCI:\n{}\n\nPRIPREMA:\n{}\n{}\n",
        recipe.name, underline, nutrition, ingredients, instructions, sections
    )
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod render_tests {
    use super::*;
    use crate::meal_planner::models::MealSlot;
    use crate::meal_planner::seed;
    use crate::message_assistant::service::MessageDraft;
    use time::{Date, Month};

    fn date(year: i32, month: Month, day: u8) -> Date {
        Date::from_calendar_date(year, month, day).expect("valid date")
    }

    #[test]
    fn general_message_passes_through() {
        let response = Response::General {
            message: "Zdravo!".into(),
        };
        assert_eq!(format_response(&response), "Zdravo!");
    }

    #[test]
    fn daily_plan_renders_banner_and_recipe_block() {
        let recipe = seed::initial_recipes().remove(0);
        let plan = DailyPlan {
            date: date(2024, Month::August, 15),
            meals: vec![
                MealSlot {
                    meal_type: "doručak".into(),
                    recipe: Some(recipe),
                },
                MealSlot {
                    meal_type: "ručak".into(),
                    recipe: None,
                },
            ],
        };
        let text = format_response(&Response::MealPlanDaily { plan });

        assert!(text.starts_with("Evo predloga za 15.08.2024:\n"));
        assert!(text.contains("===== DORUČAK ====="));
        assert!(text.contains("AVOKADO-TUNA TOST"));
        assert!(text.contains("366KCAL; 23P, 28UH, 18M"));
        assert!(text.contains("SASTOJCI:\n• 1 integralni tost (45-50g)"));
        assert!(text.contains("PRIPREMA:\n1. Na integralni tost"));
        assert!(text.contains("Ručak: Nema predloga."));
    }

    #[test]
    fn recipe_block_includes_named_sub_sections() {
        let chicken = seed::initial_recipes().remove(1);
        let text = format_recipe(&chicken);
        assert!(text.contains("SOS:\n• 60g niskomasnog namaza"));
    }

    #[test]
    fn weekly_plan_lists_days_with_serbian_names() {
        let mut plan = WeeklyPlan::new();
        // 2024-08-05 is a Monday.
        for offset in 0..7 {
            let d = date(2024, Month::August, 5 + offset);
            plan.insert(
                crate::dates::format_iso(d),
                DailyPlan {
                    date: d,
                    meals: vec![MealSlot {
                        meal_type: "ručak".into(),
                        recipe: None,
                    }],
                },
            );
        }
        let text = format_response(&Response::MealPlanWeekly { plan });

        assert!(text.starts_with("Nedeljni plan obroka:\n\n"));
        assert!(text.contains("--- Ponedeljak (05.08.2024) ---"));
        assert!(text.contains("--- Nedelja (11.08.2024) ---"));
        assert!(text.contains("Ručak: Nema predloga"));
        assert!(text.ends_with("Za detalje o receptu, pitajte za konkretan dan i obrok."));
    }

    #[test]
    fn draft_response_is_addressed_to_the_sender() {
        let draft = MessageDraft {
            original_message: "Hvala!".into(),
            sender: "Marko".into(),
            draft_response: "Zdravo Marko,\n\nNema na čemu.".into(),
            confidence: 0.8,
        };
        let text = format_response(&Response::MessageDraft { draft });
        assert!(text.starts_with("Predlog odgovora za Marko:\n\n"));
        assert!(text.contains("Nema na čemu."));
    }
}
