//! Тесты лексера sqllex

mod tokenizer_tests;
