//! Общие утилиты для интеграционных тестов

use sqllex::parser::Tokenizer;

/// Большой запрос с CTE, оконными функциями и соединениями
pub const VPIT: &str = include_str!("../../fixtures/vpit.sql");

/// Скрипт из трех пакетов, разделенных `GO`
pub fn three_batch_script() -> String {
    format!("{}\nGO\nselect 1\n  go  \n{}", VPIT, VPIT)
}

/// Приводит текст к верхнему регистру, отделяет пунктуацию пробелами
/// и схлопывает все пробельные символы в один пробел
pub fn normalize(sql: &str) -> String {
    let mut spaced = String::with_capacity(sql.len() * 2);
    for ch in sql.trim().to_uppercase().chars() {
        if ";(),+-*/.".contains(ch) {
            spaced.push(' ');
            spaced.push(ch);
            spaced.push(' ');
        } else {
            spaced.push(ch);
        }
    }

    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Склеивает значения примитивных токенов через пробел
pub fn join_primitive_values(sql: &str) -> String {
    let mut tokenizer = Tokenizer::sql(sql);
    let mut values = Vec::new();
    while let Some(token) = tokenizer.next() {
        values.push(tokenizer.value_of(&token));
    }
    values.join(" ")
}
