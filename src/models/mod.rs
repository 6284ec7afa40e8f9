mod conversion;
pub use conversion::*;

use crate::converter::Converter;

/// Общие данные для обработчиков
#[derive(Clone)]
pub struct AppState {
    pub converter: Converter,
}
impl AppState {
    /// Создать новый экземпляр общих данных
    pub fn new(converter: Converter) -> Self {
        Self { converter }
    }
}
