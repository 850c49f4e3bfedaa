//! 资源路径解析
//!
//! 打包运行时以可执行文件所在目录为基准，开发运行时以当前工作目录为基准。

use log::debug;
use std::env;
use std::path::{Path, PathBuf};

/// 打包形式下与可执行文件并列的资源目录名
pub const BUNDLE_MARKER: &str = "assets";

/// 运行时布局
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeLayout {
    /// 打包发布：资源随可执行文件一起分发
    Bundled(PathBuf),
    /// 开发模式：资源位于当前工作目录
    Development(PathBuf),
}

impl RuntimeLayout {
    /// 基准目录
    pub fn base(&self) -> &Path {
        match self {
            RuntimeLayout::Bundled(dir) | RuntimeLayout::Development(dir) => dir,
        }
    }

    pub fn is_bundled(&self) -> bool {
        matches!(self, RuntimeLayout::Bundled(_))
    }

    /// 可执行文件目录下存在资源目录即为打包布局，否则退回工作目录
    pub fn from_dirs(exe_dir: Option<&Path>, working_dir: PathBuf) -> Self {
        match exe_dir {
            Some(dir) if dir.join(BUNDLE_MARKER).is_dir() => {
                RuntimeLayout::Bundled(dir.to_path_buf())
            }
            _ => RuntimeLayout::Development(working_dir),
        }
    }
}

/// 资源解析器
///
/// `resolve` 永不失败，即使目标文件不存在也返回路径。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceResolver {
    layout: RuntimeLayout,
}

impl ResourceResolver {
    /// 探测当前运行时布局
    pub fn detect() -> Self {
        let exe = env::current_exe().ok();
        let working_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let layout = RuntimeLayout::from_dirs(exe.as_deref().and_then(Path::parent), working_dir);

        debug!("Resource layout: {:?}", layout);
        Self { layout }
    }

    /// 使用指定基准目录（开发布局）
    pub fn with_base(base: impl Into<PathBuf>) -> Self {
        Self {
            layout: RuntimeLayout::Development(base.into()),
        }
    }

    pub fn from_layout(layout: RuntimeLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &RuntimeLayout {
        &self.layout
    }

    /// 将逻辑资源路径映射为绝对路径
    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.layout.base().join(relative)
    }
}
