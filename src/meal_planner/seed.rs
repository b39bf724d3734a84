use std::collections::BTreeMap;

use crate::meal_planner::models::{NutritionFacts, Recipe};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn recipe(
    id: u32,
    name: &str,
    nutrition_label: &str,
    meal_type: &str,
    tags: &[&str],
    image: &str,
    ingredients: &[&str],
    instructions: &[&str],
) -> Recipe {
    Recipe {
        id,
        name: name.into(),
        number: Some(id),
        ingredients: strings(ingredients),
        instructions: strings(instructions),
        nutritional_info: NutritionFacts::from_label(nutrition_label),
        prep_time: None,
        cuisine_type: None,
        tags: strings(tags),
        meal_type: Some(meal_type.into()),
        image_path: Some(format!("images/{image}")),
        difficulty: None,
        additional_sections: BTreeMap::new(),
    }
}

/// The recipe-card starter set written out when no collection file exists.
pub fn initial_recipes() -> Vec<Recipe> {
    let avocado_toast = recipe(
        1,
        "AVOKADO-TUNA TOST",
        "366KCAL;23P,28UH,18M",
        "doručak/užina/večera",
        &["brzo", "jednostavno", "proteini"],
        "avokado_tuna_tost.jpg",
        &[
            "1 integralni tost (45-50g)",
            "50g avokada",
            "55g tunjevine u salamuri",
            "10g miksa semenki",
        ],
        &[
            "Na integralni tost izgnjeckate avokado i na njega stavite par kapi limunovog soka.",
            "Zatim, na vrh dodati tunjevinu i semenke po vašoj želji.",
        ],
    );

    let mut stuffed_chicken = recipe(
        2,
        "PUNJENA PILETINA",
        "429KCAL;64P,5UH,17M",
        "ručak/večera",
        &["proteini", "meso", "piletina"],
        "punjena_piletina.jpg",
        &[
            "200g piletine",
            "10g žutog sira",
            "10g suve pečenice",
            "1 kašičica ulja",
            "1 šaka rukole",
            "4 čeri paradajza",
        ],
        &[
            "Pileće grudi preseći na sredini i napraviti 'džep' u kome ćete staviti pečenicu i žuti sir.",
            "Piletinu začiniti začinima koje volite i zatvoriti džep uz pomoć dve čačkalice.",
            "Staviti piletinu na tiganj da se peče 10-15 minuta na par kapi ulja.",
            "Nakon toga piletinu staviti na pek papir, u rernu, na 10-ak minuta i 180 stepeni.",
            "Napraviti sos od niskomasnog sira i žutog sira u tiganju.",
            "Preko piletine staviti sos, a pored dodati povrće po želji.",
        ],
    );
    stuffed_chicken.additional_sections.insert(
        "SOS".into(),
        strings(&["60g niskomasnog namaza", "20g žutog sira"]),
    );

    let mut savory_pancakes = recipe(
        3,
        "SLANE PALAČINKE",
        "504KCAL;42P,28UH,25M",
        "doručak/ručak",
        &["proteini", "brzo"],
        "slane_palacinke.jpg",
        &[
            "3 jajeta",
            "30g pirinčanog brašna",
            "35g skyr jogurta",
            "4g masti/ulja za prženje",
        ],
        &[
            "Promešati jaja, brašno i skyr jogurt i posoliti smesu.",
            "Dobro zagrijati tiganj, premazati sa 2-3 kapi ulja/masti i praviti palačinke.",
            "Kada budu gotove, namazati ih niskomasnim namazom.",
            "Dodati iscepkanu pršutu i rukolu ili drugo povrće po želji.",
        ],
    );
    savory_pancakes.additional_sections.insert(
        "FIL ZA PALAČINKE".into(),
        strings(&["80g niskomasnog namaza", "2 lista pršute", "1 šaka rukole"]),
    );

    let oat_mug_cake = recipe(
        4,
        "OVSENI MUG CAKE",
        "401KCAL;32P,31UH,15.5M",
        "desert/užina",
        &["slatko", "proteini", "desert"],
        "ovseni_mug_cake.jpg",
        &[
            "35g ovsenog brašna",
            "1 jaje",
            "15g whey proteina",
            "70g niskomasnog namaza",
            "1 kašičica zaslađivača",
            "1/3 kašičice praška za pecivo",
            "12g crne čokolade, 75%+ kakaa",
        ],
        &[
            "Promešati sve sastojke.",
            "Staviti u posudu koja ide u rernu.",
            "Peći 20-ak minuta na 200 stepeni ili 10-ak minuta u prethodno zagrejanoj rerni.",
        ],
    );

    let chicken_burrito = recipe(
        5,
        "PILEĆI BURITO",
        "584KCAL;62P,43UH,17M",
        "ručak/večera",
        &["proteini", "meso", "piletina"],
        "pileci_burito.jpg",
        &[
            "170g piletine",
            "1 tortilja (60g)",
            "60g niskomasnog namaza",
            "20g žutog sira",
            "20g kukuruza",
            "40g crvenog pasulja iz konzerve",
            "10g suve pečenice",
        ],
        &[
            "Iseckati pileći file na komadiće i začiniti ga po želji.",
            "Iseckano meso staviti na tiganj, na 2-3 kapi ulja/masti dok ne poprimi boju.",
            "Dodati niskomasni namaz i žuti sir u tiganj i mešati zajedno 1-2 minuta dok se ne dobije kremasta smesa.",
            "Prethodno staviti tortilju u tiganj na minut sa jedne strane i 30 sekundi sa druge da dobije boju.",
            "Staviti meso u tortilju, dodati crveni pasulj, kukuruz i malo suve pečenice.",
            "Zatvoriti burito i uživati!",
        ],
    );

    vec![
        avocado_toast,
        stuffed_chicken,
        savory_pancakes,
        oat_mug_cake,
        chicken_burrito,
    ]
}
