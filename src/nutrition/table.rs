//! Built-in food table and alias map
//!
//! Approximate values per 100 g: calories (kcal), protein, carbs and fat (g).
//! Entry order matters: the resolver takes the first containment match.

use crate::models::NutritionRecord;

/// A named row of the food table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoodEntry {
    pub name: &'static str,
    pub nutrition: NutritionRecord,
}

const fn food(name: &'static str, calories: f64, protein: f64, carbs: f64, fat: f64) -> FoodEntry {
    FoodEntry {
        name,
        nutrition: NutritionRecord::new(calories, protein, carbs, fat),
    }
}

pub static FOOD_TABLE: &[FoodEntry] = &[
    // ========================================================================
    // Staples
    // ========================================================================
    food("米饭", 130.0, 2.7, 28.6, 0.3),
    food("馒头", 286.0, 7.8, 45.7, 1.1),
    food("面条", 130.0, 3.5, 25.5, 1.6),
    food("玉米", 106.0, 4.0, 22.8, 1.2),
    food("红薯", 86.0, 1.1, 20.1, 0.2),
    food("土豆", 77.0, 2.0, 17.2, 0.2),
    food("全麦面包", 250.0, 8.8, 43.9, 3.2),
    // ========================================================================
    // Meat and eggs
    // ========================================================================
    food("鸡蛋", 155.0, 12.7, 1.1, 10.6),
    food("鸡胸肉", 118.0, 20.8, 1.7, 2.5),
    food("瘦牛肉", 106.0, 20.2, 0.2, 2.3),
    food("瘦猪肉", 143.0, 20.3, 0.0, 6.2),
    food("三文鱼", 139.0, 20.4, 0.0, 5.4),
    food("虾仁", 80.0, 16.8, 1.5, 0.8),
    // ========================================================================
    // Vegetables
    // ========================================================================
    food("西兰花", 34.0, 2.8, 6.6, 0.4),
    food("菠菜", 28.0, 2.6, 4.5, 0.3),
    food("黄瓜", 16.0, 0.8, 2.9, 0.2),
    food("番茄", 18.0, 0.9, 3.9, 0.2),
    food("胡萝卜", 41.0, 1.0, 9.6, 0.2),
    food("生菜", 16.0, 1.4, 2.1, 0.2),
    food("金针菇", 32.0, 2.4, 6.0, 0.4),
    // ========================================================================
    // Fruit
    // ========================================================================
    food("苹果", 52.0, 0.3, 13.5, 0.2),
    food("香蕉", 91.0, 1.4, 22.8, 0.2),
    food("草莓", 32.0, 1.0, 7.7, 0.3),
    food("橙子", 47.0, 0.9, 11.1, 0.2),
    food("蓝莓", 57.0, 0.7, 14.5, 0.3),
    food("芒果", 60.0, 0.6, 14.9, 0.3),
    // ========================================================================
    // Dairy and soy
    // ========================================================================
    food("牛奶", 54.0, 3.2, 4.8, 1.5),
    food("酸奶", 72.0, 2.5, 9.3, 2.7),
    food("豆腐", 85.0, 8.1, 4.2, 3.7),
    food("豆浆", 16.0, 1.8, 1.1, 0.7),
    food("芝士", 328.0, 21.5, 1.3, 26.4),
    // ========================================================================
    // Drinks
    // ========================================================================
    food("白开水", 0.0, 0.0, 0.0, 0.0),
    food("无糖可乐", 0.0, 0.0, 0.0, 0.0),
    food("奶茶", 180.0, 2.5, 38.0, 2.0), // regular sweetness
    food("咖啡", 2.0, 0.1, 0.1, 0.0),   // black
    // ========================================================================
    // Snacks
    // ========================================================================
    food("薯片", 536.0, 7.5, 49.2, 37.6),
    food("巧克力", 546.0, 4.2, 63.1, 29.7),
    food("坚果混合装", 607.0, 21.3, 20.0, 54.2),
    // ========================================================================
    // Condiments
    // ========================================================================
    food("食用油", 899.0, 0.0, 0.0, 99.9),
    food("盐", 0.0, 0.0, 0.0, 0.0),
    food("酱油", 26.0, 5.6, 1.0, 0.1),
];

/// Colloquial or regional names mapped to table keys. Keys are already
/// normalized (trimmed, lower-case).
pub static FOOD_ALIASES: &[(&str, &str)] = &[
    ("洋芋", "土豆"),
    ("马铃薯", "土豆"),
    ("西红柿", "番茄"),
    ("凤梨", "菠萝"),
    ("鸡胸", "鸡胸肉"),
    ("瘦牛", "瘦牛肉"),
    ("瘦猪", "瘦猪肉"),
];

/// Look up a food by its exact table name
pub fn find_exact(name: &str) -> Option<&'static FoodEntry> {
    FOOD_TABLE.iter().find(|entry| entry.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_names_unique() {
        let names: HashSet<_> = FOOD_TABLE.iter().map(|e| e.name).collect();
        assert_eq!(names.len(), FOOD_TABLE.len());
        assert_eq!(FOOD_TABLE.len(), 41);
    }

    #[test]
    fn test_values_non_negative() {
        for entry in FOOD_TABLE {
            let n = entry.nutrition;
            assert!(
                n.calories >= 0.0 && n.protein >= 0.0 && n.carbs >= 0.0 && n.fat >= 0.0,
                "{} has a negative value",
                entry.name
            );
        }
    }

    #[test]
    fn test_aliases_mostly_point_into_table() {
        let dangling: Vec<_> = FOOD_ALIASES
            .iter()
            .filter(|(_, canonical)| find_exact(canonical).is_none())
            .map(|(alias, _)| *alias)
            .collect();
        // 菠萝 has no table row yet
        assert_eq!(dangling, vec!["凤梨"]);
    }
}
