use anyhow::Result;
use clap::{Parser, Subcommand};
use xshell::{Shell, cmd};

#[derive(Parser)]
#[command(name = "xtask", about = "Peluditos 开发任务自动化")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 构建桌面应用 (release)
    Build,
    /// 运行桌面应用 (开发模式)
    Run {
        /// 日志级别 (trace, debug, info, warn, error)
        #[arg(short, long, default_value = "info")]
        log_level: String,
    },
    /// 打包发布 (tar.gz，包含 assets/)
    Dist,
    /// 运行测试
    Test,
    /// 清理构建产物
    Clean,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let sh = Shell::new()?;

    // 确保在项目根目录执行，assets/ 相对于工作目录解析
    let project_root = std::env::var("CARGO_MANIFEST_DIR")
        .map(std::path::PathBuf::from)
        .ok()
        .and_then(|p| p.parent().map(std::path::Path::to_path_buf))
        .map_or_else(std::env::current_dir, Ok)?;
    sh.change_dir(&project_root);

    match cli.command {
        Commands::Build => build(&sh)?,
        Commands::Run { log_level } => run(&sh, &log_level)?,
        Commands::Dist => dist(&sh)?,
        Commands::Test => test(&sh)?,
        Commands::Clean => clean(&sh)?,
    }

    Ok(())
}

fn build(sh: &Shell) -> Result<()> {
    println!("🔨 构建桌面应用...");
    cmd!(sh, "cargo build --release -p peluditos-gui").run()?;
    println!("✅ 构建完成");
    Ok(())
}

fn run(sh: &Shell, log_level: &str) -> Result<()> {
    println!("🐾 启动 Peluditos (开发模式)...");
    println!("   日志级别: {log_level}");

    let rust_log = format!("{log_level},peluditos_core={log_level},peluditos_gui={log_level}");
    cmd!(sh, "cargo run -p peluditos-gui")
        .env("RUST_LOG", rust_log)
        .run()?;
    Ok(())
}

fn dist(sh: &Shell) -> Result<()> {
    println!("📦 打包发布...");

    build(sh)?;

    let version = env!("CARGO_PKG_VERSION");
    let dist_name = format!("peluditos-{version}-linux-x86_64");

    cmd!(sh, "mkdir -p dist/{dist_name}").run()?;
    cmd!(sh, "cp target/release/peluditos dist/{dist_name}/").run()?;
    // 可执行文件旁的 assets/ 使其按打包布局解析资源
    if sh.path_exists("assets") {
        cmd!(sh, "cp -r assets dist/{dist_name}/").run()?;
    } else {
        println!("⚠️  未找到 assets/，发布包将只显示占位图");
    }

    sh.change_dir("dist");
    cmd!(sh, "tar -czvf {dist_name}.tar.gz {dist_name}").run()?;

    println!("✅ 打包完成: dist/{dist_name}.tar.gz");
    Ok(())
}

fn test(sh: &Shell) -> Result<()> {
    println!("🧪 运行测试...");
    // GUI crate 依赖 webkit2gtk，核心库可单独测试
    cmd!(sh, "cargo test -p peluditos-core").run()?;
    cmd!(sh, "cargo test -p peluditos-gui").run()?;
    println!("✅ 测试完成");
    Ok(())
}

fn clean(sh: &Shell) -> Result<()> {
    println!("🧹 清理构建产物...");
    cmd!(sh, "cargo clean").run()?;
    if sh.path_exists("dist") {
        sh.remove_path("dist")?;
    }
    println!("✅ 清理完成");
    Ok(())
}
