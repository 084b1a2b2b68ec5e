// fixtures/tables/reference.rs - Categories, franchises and allergens

use crate::web_app::model::{Allergen, Category, Franchise};

pub fn categories() -> Vec<Category> {
    [(1, "Chicken", "치킨"), (2, "Pizza", "피자"), (3, "Burger", "버거"), (4, "Cafe", "카페")]
        .into_iter()
        .map(|(id, name, name_korean)| Category {
            id,
            name: name.to_string(),
            name_korean: name_korean.to_string(),
        })
        .collect()
}

pub fn franchises() -> Vec<Franchise> {
    [
        (1, "BBQ", 1),
        (2, "교촌치킨", 1),
        (3, "도미노피자", 2),
        (4, "맘스터치", 3),
        (5, "롯데리아", 3),
        (6, "Starbucks", 4),
    ]
    .into_iter()
    .map(|(id, name, category_id)| Franchise {
        id,
        name: name.to_string(),
        category_id,
        logo_url: None,
    })
    .collect()
}

pub fn allergens() -> Vec<Allergen> {
    [
        (1, "Milk", "우유"),
        (2, "Wheat", "밀"),
        (3, "Soybean", "대두"),
        (4, "Egg", "난류"),
        (5, "Chicken", "닭고기"),
        (6, "Pork", "돼지고기"),
        (7, "Beef", "쇠고기"),
        (8, "Tomato", "토마토"),
    ]
    .into_iter()
    .map(|(id, name, name_korean)| Allergen {
        id,
        name: name.to_string(),
        name_korean: name_korean.to_string(),
    })
    .collect()
}
