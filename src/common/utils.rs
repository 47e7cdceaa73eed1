//! Утилиты для sqllex

use crate::parser::token::Span;

/// Разбивает SQL скрипт на пакеты по строке-разделителю (по умолчанию `GO`)
///
/// Строка считается разделителем, если после обрезки пробелов и приведения
/// к нижнему регистру она совпадает с разделителем. Пустые пакеты отбрасываются.
pub fn split_batches(script: &str, separator: &str) -> Vec<String> {
    let separator = separator.trim().to_lowercase();
    let mut batches = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in script.split('\n') {
        if line.trim().to_lowercase() == separator {
            push_batch(&mut batches, &current);
            current.clear();
        } else {
            current.push(line);
        }
    }
    push_batch(&mut batches, &current);

    log::trace!("Найдено {} пакетов", batches.len());
    batches
}

fn push_batch(batches: &mut Vec<String>, lines: &[&str]) {
    let batch = lines.join("\n");
    let batch = batch.trim();
    if !batch.is_empty() {
        batches.push(batch.to_string());
    }
}

/// Находит токен, покрывающий заданное смещение
pub fn find_token_at<T: Span>(tokens: &[T], offset: usize) -> Option<&T> {
    tokens.iter().find(|token| token.contains(offset))
}
