//! Интеграционные тесты для sqllex
//!
//! Проверяют оба уровня лексера на реальных скриптах, разбор пакетов
//! и исполняемый файл.

pub mod cli_tests;
pub mod common;
pub mod round_trip_tests;
pub mod script_tests;
