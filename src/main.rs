use std::path::PathBuf;

use clap::{Parser, Subcommand};
use india_co2_estimator::i18n::{keys, Translator};
use india_co2_estimator::{app, config};
use tracing_subscriber::EnvFilter;

/// 인도 생활 패턴 기준 연간 CO2e 배출량 계산기 (CLI).
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// 표시 언어 (auto/ko/en)
    #[arg(long, short = 'L', global = true)]
    lang: Option<String>,
    /// 입력 범위 경고를 끈다
    #[arg(long, global = true, default_value_t = false)]
    no_bounds_check: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 대화형 메뉴 (기본)
    Interactive,
    /// 입력 프로필로 한 번 계산하고 결과를 출력한다
    Compute {
        /// 입력 프로필 TOML. 생략하면 폼 기본값
        #[arg(long, short)]
        input: Option<PathBuf>,
        /// 합계(t)만 출력
        #[arg(long, default_value_t = false)]
        tons_only: bool,
    },
    /// 배출계수 표를 출력한다
    Factors {
        /// 특정 키만 조회 (예: grid_elec)
        key: Option<String>,
    },
    /// 기본값으로 채운 입력 프로필을 만든다
    Template {
        #[arg(long, short)]
        output: PathBuf,
    },
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut cfg = match config::load_or_default() {
        Ok(cfg) => cfg,
        Err(err) => {
            tracing::warn!("config unavailable, using defaults: {err}");
            config::Config::default()
        }
    };
    let tr = app::translator_for(&cfg, cli.lang.as_deref());
    if let Err(err) = try_run(cli, &mut cfg, &tr) {
        eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
        std::process::exit(1);
    }
}

fn try_run(cli: Cli, cfg: &mut config::Config, tr: &Translator) -> Result<(), app::AppError> {
    let check_bounds = !cli.no_bounds_check;
    match cli.command.unwrap_or(Command::Interactive) {
        Command::Interactive => app::run(cfg, cli.lang.as_deref(), check_bounds),
        Command::Compute { input, tons_only } => {
            app::run_compute(cfg, tr, input.as_deref(), tons_only, check_bounds)
        }
        Command::Factors { key } => app::print_factors(tr, key.as_deref()),
        Command::Template { output } => app::write_template(&output),
    }
}
