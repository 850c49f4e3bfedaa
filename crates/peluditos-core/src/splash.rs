//! 启动页控制
//!
//! 单次过渡：启动页 → 目录。计时器与用户输入再多，也只过渡一次。

use log::{debug, info};
use std::time::Duration;

/// 当前顶层界面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Splash,
    Catalog,
}

/// 启动页控制器
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplashController {
    delay: Duration,
    screen: Screen,
}

impl SplashController {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            screen: Screen::Splash,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// 结束启动页；仅第一次调用返回 `true`
    pub fn finish(&mut self) -> bool {
        match self.screen {
            Screen::Splash => {
                info!("Splash finished after {:?}, showing catalog", self.delay);
                self.screen = Screen::Catalog;
                true
            }
            Screen::Catalog => {
                debug!("Ignoring repeated splash transition");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_splash() {
        let splash = SplashController::new(Duration::from_millis(1800));
        assert_eq!(splash.screen(), Screen::Splash);
        assert_eq!(splash.delay(), Duration::from_millis(1800));
    }

    #[test]
    fn test_transitions_exactly_once() {
        let mut splash = SplashController::new(Duration::from_millis(1800));
        let transitions = (0..10).filter(|_| splash.finish()).count();
        assert_eq!(transitions, 1);
        assert_eq!(splash.screen(), Screen::Catalog);
    }
}
