//! Factory functions for wiring the descriptor service

use sdui_core::config::SduiConfig;

use crate::service::SduiService;

/// Create a descriptor service with default configuration
#[must_use]
pub fn create_sdui_service() -> SduiService {
    create_sdui_service_with_config(SduiConfig::default())
}

/// Create a descriptor service with custom configuration
#[must_use]
pub fn create_sdui_service_with_config(config: SduiConfig) -> SduiService {
    SduiService::new(config)
}
