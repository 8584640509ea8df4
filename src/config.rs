use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 全局配置单例
static CONFIG: OnceCell<AppConfig> = OnceCell::new();

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// 监听地址
    pub host: String,
    /// 监听端口
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别（`RUST_LOG` 未设置时生效）
    pub level: String,
    /// 日志格式：full | compact
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "full".to_string(),
        }
    }
}

/// CORS 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// 是否启用 CORS
    #[serde(default = "CorsConfig::default_enabled")]
    pub enabled: bool,
    /// 允许的 Origin 列表（支持 "*" 表示任意）
    #[serde(default = "CorsConfig::default_any")]
    pub allowed_origins: Vec<String>,
    /// 允许的方法列表（支持 "*" 表示任意）
    #[serde(default = "CorsConfig::default_any")]
    pub allowed_methods: Vec<String>,
    /// 允许的请求头列表（支持 "*" 表示任意）
    #[serde(default = "CorsConfig::default_any")]
    pub allowed_headers: Vec<String>,
    /// 暴露的响应头列表（支持 "*" 表示任意）
    #[serde(default)]
    pub expose_headers: Vec<String>,
    /// 是否允许携带凭证（Cookie/Authorization）
    #[serde(default)]
    pub allow_credentials: bool,
    /// 预检缓存时间（秒）
    #[serde(default)]
    pub max_age_secs: Option<u64>,
}

impl CorsConfig {
    fn default_enabled() -> bool {
        true
    }

    fn default_any() -> Vec<String> {
        vec!["*".to_string()]
    }

    /// 关闭状态的空配置，便于测试/局部覆盖时从零开始填写。
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            allowed_origins: Vec::new(),
            allowed_methods: Vec::new(),
            allowed_headers: Vec::new(),
            expose_headers: Vec::new(),
            allow_credentials: false,
            max_age_secs: None,
        }
    }
}

/// 默认即允许任意跨域访问：前端与本服务通常不同源部署。
impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: Self::default_enabled(),
            allowed_origins: Self::default_any(),
            allowed_methods: Self::default_any(),
            allowed_headers: Self::default_any(),
            ..Self::disabled()
        }
    }
}

/// 存储目录配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// 上传图片目录
    pub upload_dir: String,
    /// 生成结果目录（预留，当前不写入）
    pub output_dir: String,
    /// 上传图片固定文件名（每次上传覆盖）
    pub upload_file_name: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_dir: "uploads".to_string(),
            output_dir: "outputs".to_string(),
            upload_file_name: "room.jpg".to_string(),
        }
    }
}

/// 上传图片处理配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    /// 目标宽度（直接拉伸，不保持宽高比）
    pub target_width: u32,
    /// 目标高度
    pub target_height: u32,
    /// JPEG 编码质量（1-100）
    pub jpeg_quality: u8,
    /// 是否优先速度（Triangle 滤波代替 CatmullRom）
    pub optimize_speed: bool,
    /// 并发处理许可数（0=自动，取 CPU 核心数）
    pub max_parallel: u32,
    /// 请求体上限（字节）
    pub max_upload_bytes: usize,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            target_width: 512,
            target_height: 512,
            jpeg_quality: 90,
            optimize_speed: false,
            max_parallel: 0,
            max_upload_bytes: 20 * 1024 * 1024,
        }
    }
}

impl ImageConfig {
    /// 实际生效的并发许可数
    pub fn effective_parallelism(&self) -> usize {
        if self.max_parallel == 0 {
            num_cpus::get()
        } else {
            self.max_parallel as usize
        }
    }
}

/// 生成任务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// 占位实现返回的提示语
    pub note: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            note: "Colab connection coming in next step".to_string(),
        }
    }
}

/// 优雅退出配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShutdownConfig {
    /// 收到退出信号后等待在途请求完成的最长时间（秒）
    pub timeout_secs: u64,
}

impl Default for ShutdownConfig {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}

impl ShutdownConfig {
    pub fn timeout_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs)
    }
}

/// 应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// CORS 配置
    #[serde(default)]
    pub cors: CorsConfig,
    /// 存储目录
    #[serde(default)]
    pub storage: StorageConfig,
    /// 图片处理
    #[serde(default)]
    pub image: ImageConfig,
    /// 生成任务
    #[serde(default)]
    pub generation: GenerationConfig,
    /// 优雅退出
    #[serde(default)]
    pub shutdown: ShutdownConfig,
}

impl AppConfig {
    /// 从配置文件加载配置，支持环境变量覆盖。
    ///
    /// 配置文件可缺省（全部使用默认值）；环境变量示例：`APP__SERVER__PORT=8080`。
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::get_config_path();

        let builder = ConfigBuilder::builder()
            .add_source(File::from(config_path).required(false))
            .add_source(Self::env_source())
            .build()?;

        let config: Self = builder.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// `APP__` 前缀的环境变量源；列表型键按逗号拆分，
    /// 例如 `APP__CORS__ALLOWED_ORIGINS=http://a.com,http://b.com`。
    fn env_source() -> Environment {
        Environment::with_prefix("APP")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("cors.allowed_origins")
            .with_list_parse_key("cors.allowed_methods")
            .with_list_parse_key("cors.allowed_headers")
            .with_list_parse_key("cors.expose_headers")
    }

    /// 获取全局配置单例
    pub fn global() -> &'static AppConfig {
        CONFIG.get().expect("配置未初始化，请先调用 init_global()")
    }

    /// 初始化全局配置
    pub fn init_global() -> Result<(), ConfigError> {
        let config = Self::load()?;
        CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("配置已经被初始化".to_string()))?;
        Ok(())
    }

    /// 获取配置文件路径
    pub fn get_config_path() -> PathBuf {
        PathBuf::from("config.toml")
    }

    /// 校验无法由类型表达的约束
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.image.target_width == 0 || self.image.target_height == 0 {
            return Err(ConfigError::Message(
                "image.target_width/target_height 必须大于 0".to_string(),
            ));
        }
        if !(1..=100).contains(&self.image.jpeg_quality) {
            return Err(ConfigError::Message(
                "image.jpeg_quality 必须在 1-100 之间".to_string(),
            ));
        }
        if self.image.max_upload_bytes == 0 {
            return Err(ConfigError::Message(
                "image.max_upload_bytes 必须大于 0".to_string(),
            ));
        }
        if self.storage.upload_file_name.trim().is_empty() {
            return Err(ConfigError::Message(
                "storage.upload_file_name 不能为空".to_string(),
            ));
        }
        Ok(())
    }

    /// 获取服务器监听地址
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// 上传目录
    pub fn upload_path(&self) -> PathBuf {
        PathBuf::from(&self.storage.upload_dir)
    }

    /// 生成结果目录
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(&self.storage.output_dir)
    }

    /// 上传图片的固定落盘路径
    pub fn upload_file_path(&self) -> PathBuf {
        self.upload_path().join(&self.storage.upload_file_name)
    }
}
