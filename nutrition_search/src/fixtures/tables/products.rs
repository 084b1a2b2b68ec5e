// fixtures/tables/products.rs - Product rows
//
// Columns: id, name, franchise, category, calories, protein, carbs, fat
// (per 100 g), allergens, serving weight in grams, featured.

use crate::web_app::model::Product;

type Row = (
    i32,
    &'static str,
    i32,
    i32,
    Option<f64>,
    Option<f64>,
    Option<f64>,
    Option<f64>,
    &'static [i32],
    Option<f64>,
    bool,
);

const ROWS: &[Row] = &[
    (1, "황금올리브치킨", 1, 1, Some(250.0), Some(18.5), Some(12.0), Some(15.2), &[2, 3, 5], Some(1000.0), true),
    (2, "자메이카 통다리구이", 1, 1, Some(210.0), Some(22.0), Some(6.5), Some(11.0), &[3, 5], Some(800.0), false),
    (3, "교촌오리지날", 2, 1, Some(265.0), Some(19.0), Some(10.5), Some(16.0), &[2, 3, 5], Some(900.0), true),
    (4, "허니콤보", 2, 1, Some(290.0), Some(17.0), Some(20.0), Some(16.5), &[2, 3, 5], None, false),
    (5, "슈퍼디럭스 피자", 3, 2, Some(260.0), Some(11.0), Some(30.0), Some(11.5), &[1, 2, 3, 6, 7, 8], Some(1100.0), true),
    (6, "포테이토 피자", 3, 2, None, Some(9.5), Some(31.0), None, &[1, 2, 3, 6], None, false),
    (7, "싸이버거", 4, 3, Some(245.0), Some(12.5), Some(23.0), Some(12.0), &[1, 2, 3, 4, 5, 8], Some(250.0), true),
    (8, "불고기버거", 5, 3, Some(240.0), Some(10.0), Some(28.0), Some(11.0), &[1, 2, 3, 4, 6, 7], Some(200.0), false),
    (9, "새우버거", 5, 3, Some(230.0), Some(8.0), None, Some(10.5), &[2, 3, 4, 8], Some(190.0), false),
    (10, "카페 라떼", 6, 4, Some(45.0), Some(3.0), Some(4.5), Some(1.8), &[1], Some(355.0), false),
    (11, "콜드 브루", 6, 4, Some(2.0), None, Some(0.3), Some(0.0), &[], Some(355.0), false),
    (12, "치킨 너겟", 4, 3, Some(280.0), Some(15.0), Some(18.0), Some(17.0), &[2, 3, 5], None, false),
];

pub fn products() -> Vec<Product> {
    ROWS.iter()
        .map(
            |&(id, name, franchise_id, category_id, calories, protein, carbs, fat, allergens, weight, featured_product)| {
                Product {
                    id,
                    name: name.to_string(),
                    franchise_id,
                    category_id,
                    calories,
                    protein,
                    carbs,
                    fat,
                    allergens: allergens.to_vec(),
                    weight,
                    featured_product,
                }
            },
        )
        .collect()
}
