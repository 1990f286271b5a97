use std::path::Path;

use tracing::info;

use crate::config::{self, Config, ConfigError};
use crate::emission::{self, EmissionError, EmissionFactors, EmissionInput, FactorError};
use crate::i18n::{self, keys, Translator};
use crate::report;
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 배출량 계산 오류
    #[error("계산 오류: {0}")]
    Emission(#[from] EmissionError),
    /// 배출계수 조회 오류
    #[error("배출계수 오류: {0}")]
    Factor(#[from] FactorError),
    /// 표준 입력이 닫힘
    #[error("입력 스트림이 닫혔습니다")]
    InputClosed,
}

/// 설정의 언어 값으로 번역기를 만든다.
pub fn translator_for(cfg: &Config, cli_lang: Option<&str>) -> Translator {
    Translator::new(&i18n::resolve_language(cli_lang, Some(cfg.language.as_str())))
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(
    config: &mut Config,
    cli_lang: Option<&str>,
    check_bounds: bool,
) -> Result<(), AppError> {
    let mut tr = translator_for(config, cli_lang);
    println!("{}", tr.t(keys::APP_SUBTITLE));
    loop {
        match ui_cli::main_menu(&tr)? {
            MenuChoice::EditInputs => ui_cli::handle_edit_inputs(&tr, config)?,
            // 식단 라벨 오류는 메뉴 루프를 끝내지 않는다.
            MenuChoice::Results => match ui_cli::handle_results(&tr, config, check_bounds) {
                Err(AppError::Emission(e)) => eprintln!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
                other => other?,
            },
            MenuChoice::Factors => ui_cli::handle_factors(&tr),
            MenuChoice::Tips => ui_cli::handle_tips(&tr),
            MenuChoice::Settings => {
                if ui_cli::handle_settings(&tr, config)? {
                    tr = translator_for(config, None);
                }
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}

/// 비대화식 계산. 프로필 파일이 없으면 폼 기본값을 쓴다.
pub fn run_compute(
    config: &Config,
    tr: &Translator,
    profile: Option<&Path>,
    tons_only: bool,
    check_bounds: bool,
) -> Result<(), AppError> {
    let input = match profile {
        Some(path) => {
            info!(path = %path.display(), "loading input profile");
            config::load_profile(path)?
        }
        None => EmissionInput::default(),
    };
    if tons_only {
        if check_bounds {
            ui_cli::warn_bounds(tr, &input);
        }
        let output = emission::compute(&input)?;
        println!("{:.prec$}", output.total_tons(), prec = config.decimals);
        return Ok(());
    }
    ui_cli::print_report(tr, &input, config.decimals, check_bounds)
}

/// 배출계수 표를 출력한다. 키를 주면 해당 계수만 출력한다.
pub fn print_factors(tr: &Translator, key: Option<&str>) -> Result<(), AppError> {
    let factors = EmissionFactors::shared();
    match key {
        Some(name) => println!("{}", factors.lookup(name)?),
        None => print!("{}", report::render_factors(factors, tr)),
    }
    Ok(())
}

/// 폼 기본값으로 채운 입력 프로필 파일을 만든다.
pub fn write_template(path: &Path) -> Result<(), AppError> {
    config::save_profile(path, &EmissionInput::default())?;
    Ok(())
}
