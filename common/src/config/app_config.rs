use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub cycle: CycleSettings,
    #[serde(default)]
    pub poll: PollConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// 后端 API 根地址，如 https://api.example.com/api
    pub base_url: String,
    /// 单次请求超时（秒）
    pub timeout_secs: u64,
}

/// 收益周期参数
///
/// profile 选择一套预置常量 ("production" = 8小时周期 / "demo" = 5分钟测试周期)，
/// 其余字段为可选的逐项覆盖。周期长度与费率的取舍由部署方决定，不在代码里写死。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleSettings {
    pub profile: String,
    /// 覆盖: 周期时长（分钟）
    pub cycle_minutes: Option<i64>,
    /// 覆盖: 周末周期时长（分钟）
    pub weekend_cycle_minutes: Option<i64>,
    /// 覆盖: 单周期收益率 = 日利率 / rate_divisor
    pub rate_divisor: Option<u32>,
    /// 覆盖: 平台手续费率 (如 0.15)
    pub fee_rate: Option<f64>,
    /// 覆盖: 是否只允许工作日启动/结算周期
    pub weekday_gate: Option<bool>,
    /// 覆盖: 提现批准后的等待期（小时）
    pub waiting_hours: Option<i64>,
}

impl Default for CycleSettings {
    fn default() -> Self {
        Self {
            profile: "production".to_string(),
            cycle_minutes: None,
            weekend_cycle_minutes: None,
            rate_divisor: None,
            fee_rate: None,
            weekday_gate: None,
            waiting_hours: None,
        }
    }
}

/// 各数据域的轮询间隔（秒）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollConfig {
    pub dashboard_secs: u64,
    pub withdrawals_secs: u64,
    pub referrals_secs: u64,
    pub deposits_secs: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            dashboard_secs: 2,
            withdrawals_secs: 10,
            referrals_secs: 5,
            deposits_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub level: String,
}

impl AppConfig {
    /// 从配置文件加载配置
    pub fn from_file(config_path: &str) -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // 加载默认配置
            .add_source(File::with_name(config_path).required(false))
            // 加载环境特定配置
            .add_source(File::with_name(&format!("{}.{}", config_path, run_mode)).required(false))
            // 从环境变量加载配置（前缀为 APP_）
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// 从嵌入的配置内容加载（支持编译时嵌入）
    pub fn from_embedded(
        default_config: &str,
        prod_config: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let mut builder = Config::builder()
            // 加载嵌入的默认配置
            .add_source(File::from_str(default_config, FileFormat::Toml));

        // 如果是生产环境且提供了生产配置，加载生产配置
        if run_mode == "production" {
            if let Some(prod_cfg) = prod_config {
                builder = builder.add_source(File::from_str(prod_cfg, FileFormat::Toml));
            }
        }

        // 从环境变量加载配置（优先级最高）
        let config = builder
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// 智能加载配置：优先从文件加载，如果失败则从嵌入资源加载
    pub fn from_file_or_embedded(
        config_path: &str,
        default_config: &str,
        prod_config: Option<&str>,
    ) -> Result<Self, ConfigError> {
        match Self::from_file(config_path) {
            Ok(config) => {
                println!("从文件系统加载配置: {}", config_path);
                Ok(config)
            }
            Err(e) => {
                println!("文件系统加载配置失败: {}，使用嵌入配置", e);
                Self::from_embedded(default_config, prod_config)
            }
        }
    }

    /// 从环境变量加载配置
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        Ok(AppConfig {
            api: ApiConfig {
                base_url: env::var("API_BASE_URL")
                    .unwrap_or_else(|_| "http://localhost:5000/api".to_string()),
                timeout_secs: env::var("API_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "15".to_string())
                    .parse()
                    .unwrap_or(15),
            },
            cycle: CycleSettings {
                profile: env::var("CYCLE_PROFILE").unwrap_or_else(|_| "production".to_string()),
                ..CycleSettings::default()
            },
            poll: PollConfig::default(),
            log: LogConfig {
                level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            api: ApiConfig {
                base_url: "http://localhost:5000/api".to_string(),
                timeout_secs: 15,
            },
            cycle: CycleSettings::default(),
            poll: PollConfig::default(),
            log: LogConfig {
                level: "info".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let toml = r#"
            [api]
            base_url = "https://backend.example.com/api"
            timeout_secs = 20

            [cycle]
            profile = "demo"
            fee_rate = 0.15

            [poll]
            dashboard_secs = 1
            withdrawals_secs = 10
            referrals_secs = 5
            deposits_secs = 30

            [log]
            level = "debug"
        "#;
        let cfg = AppConfig::from_embedded(toml, None).expect("embedded config");
        assert_eq!(cfg.api.base_url, "https://backend.example.com/api");
        assert_eq!(cfg.cycle.profile, "demo");
        assert_eq!(cfg.cycle.fee_rate, Some(0.15));
        assert_eq!(cfg.poll.dashboard_secs, 1);
    }

    #[test]
    fn test_default_poll_intervals() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.poll.deposits_secs, 30);
        assert_eq!(cfg.cycle.profile, "production");
    }
}
