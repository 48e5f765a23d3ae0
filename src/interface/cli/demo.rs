//! 정수 나눗셈 데모. 실패를 핸들러로 보고한다.

use anyhow::Result;
use thiserror::Error;

use crate::interface::cli::DemoOptions;
use crate::interface::composition::AppComposition;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("integer division by zero: {numerator} / 0")]
pub struct ZeroDivisionError {
    pub numerator: i64,
}

/// 0으로 나누면 오류, 오버플로는 포화시킨다.
pub fn divide(numerator: i64, denominator: i64) -> Result<i64, ZeroDivisionError> {
    if denominator == 0 {
        return Err(ZeroDivisionError { numerator });
    }
    Ok(numerator.saturating_div(denominator))
}

/// 설정을 로딩해 핸들러를 만들고 나눗셈 결과 또는 진단 메시지를 출력한다.
pub fn run_demo(composition: &AppComposition, options: DemoOptions) -> Result<()> {
    let config = composition
        .load_config_usecase()
        .execute(options.settings.clone())?;
    let mut handler = composition.handler(config, options.level_printer);

    if !options.styles.is_empty() {
        handler.formatter_pairs(
            options
                .styles
                .iter()
                .map(|(field, value)| (field.as_str(), value.as_str())),
        )?;
    }

    match handler.handle(divide(options.numerator, options.denominator), options.call) {
        Ok(quotient) => println!("{} / {} = {quotient}", options.numerator, options.denominator),
        Err(Some(message)) => println!("{message}"),
        // 이미 sink로 출력됨
        Err(None) => {}
    }
    Ok(())
}
