//! 도메인 정책(호출 결과 분기 규칙).

/// 진단 메시지 처리 결과. 중간 상태 없이 셋 중 하나로 끝난다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// 문자열을 호출자에게 돌려준다(출력/종료 없음).
    ReturnString,
    /// sink로 출력하고 계속 실행한다.
    PrintAndContinue,
    /// sink로 출력한 뒤 프로세스를 종료한다.
    PrintAndTerminate { quit_code: i32 },
}

/// 해석된 플래그로 결과를 결정한다.
/// `return_string_rather_than_print`가 `exit_script`보다 우선한다.
pub fn decide_outcome(return_string: bool, exit_script: bool, quit_code: i32) -> Outcome {
    if return_string {
        Outcome::ReturnString
    } else if exit_script {
        Outcome::PrintAndTerminate { quit_code }
    } else {
        Outcome::PrintAndContinue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn return_string_wins_over_exit() {
        assert_eq!(decide_outcome(true, true, 3), Outcome::ReturnString);
        assert_eq!(decide_outcome(true, false, 3), Outcome::ReturnString);
    }

    #[test]
    fn exit_flag_selects_between_print_outcomes() {
        assert_eq!(
            decide_outcome(false, true, 7),
            Outcome::PrintAndTerminate { quit_code: 7 }
        );
        assert_eq!(decide_outcome(false, false, 7), Outcome::PrintAndContinue);
    }
}
