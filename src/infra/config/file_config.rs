use serde::Deserialize;

use crate::infra::config::{AppConfig, ChatConfig, GatewayConfig, IntroConfig, LogConfig};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub gateway: Option<FileGatewayConfig>,
    pub intro: Option<FileIntroConfig>,
    pub chat: Option<FileChatConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(gateway) = self.gateway {
            gateway.merge_into(&mut config.gateway);
        }

        if let Some(intro) = self.intro {
            intro.merge_into(&mut config.intro);
        }

        if let Some(chat) = self.chat {
            chat.merge_into(&mut config.chat);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }

        if let Some(file) = self.file {
            config.file = file;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileGatewayConfig {
    pub base_url: Option<String>,
}

impl FileGatewayConfig {
    fn merge_into(self, config: &mut GatewayConfig) {
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileIntroConfig {
    pub duration_ms: Option<u64>,
}

impl FileIntroConfig {
    fn merge_into(self, config: &mut IntroConfig) {
        if let Some(duration_ms) = self.duration_ms {
            config.duration_ms = duration_ms;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileChatConfig {
    pub system_prompt: Option<String>,
}

impl FileChatConfig {
    fn merge_into(self, config: &mut ChatConfig) {
        if let Some(system_prompt) = self.system_prompt {
            config.system_prompt = system_prompt;
        }
    }
}
