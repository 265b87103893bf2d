//! Maps CLI commands onto window controller operations.

use winframe_common::NativeCallError;
use winframe_platform::{FrameSize, NativeWindowing, Window};

use crate::cli::Command;

/// Run a window command. Returns text to print, if the command has output.
pub fn execute<N: NativeWindowing>(
    window: &Window<N>,
    command: &Command,
) -> Result<Option<String>, NativeCallError> {
    match command {
        Command::Focus => window.focus()?,
        Command::Show => window.show()?,
        Command::Minimize => window.minimize()?,
        Command::Restore => window.restore()?,
        Command::Maximize => window.maximize()?,
        Command::Title { text } => window.set_title(text)?,
        Command::Size { width, height } => window.set_size(*width, *height)?,
        Command::Center => window.center()?,
        Command::Apply => window.apply_configuration()?,
        Command::Limits => {
            let limits = window.frame_size_limits()?;
            return Ok(Some(format!(
                "min: {}\nmax: {}",
                describe(limits.min),
                describe(limits.max)
            )));
        }
        Command::Config => {}
    }
    Ok(None)
}

fn describe(size: Option<FrameSize>) -> String {
    let axis = |v: Option<i32>| v.map_or_else(|| "default".to_string(), |v| v.to_string());
    match size {
        Some(s) => format!("{} x {}", axis(s.width), axis(s.height)),
        None => "default".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::sync::Arc;
    use winframe_common::{NativeError, Rect};
    use winframe_config::WindowConfiguration;
    use winframe_platform::{PositionFlags, ShowCommand, SystemMetric, WindowHandle, WindowStyle};

    /// Logs call names and adds a 10px frame on every side.
    #[derive(Default)]
    struct LogNative {
        log: RefCell<Vec<String>>,
    }

    impl LogNative {
        fn push(&self, entry: String) {
            self.log.borrow_mut().push(entry);
        }
    }

    impl NativeWindowing for LogNative {
        fn system_metric(&self, metric: SystemMetric) -> Result<i32, NativeError> {
            self.push(format!("metric {metric:?}"));
            Ok(1000)
        }

        fn set_focus(&self, _: WindowHandle) -> Result<(), NativeError> {
            self.push("focus".into());
            Ok(())
        }

        fn show_window(&self, _: WindowHandle, command: ShowCommand) -> Result<(), NativeError> {
            self.push(format!("show {}", command.code()));
            Ok(())
        }

        fn set_window_text(&self, _: WindowHandle, text: &str) -> Result<(), NativeError> {
            self.push(format!("text {text}"));
            Ok(())
        }

        fn adjust_window_rect(
            &self,
            rect: &mut Rect,
            _: WindowStyle,
            _: bool,
        ) -> Result<(), NativeError> {
            rect.left -= 10;
            rect.top -= 10;
            rect.right += 10;
            rect.bottom += 10;
            Ok(())
        }

        fn set_window_pos(
            &self,
            _: WindowHandle,
            x: i32,
            y: i32,
            width: i32,
            height: i32,
            flags: PositionFlags,
        ) -> Result<(), NativeError> {
            self.push(format!("pos {x} {y} {width} {height} {:#x}", flags.bits()));
            Ok(())
        }
    }

    fn window(native: &LogNative, config: WindowConfiguration) -> Window<&LogNative> {
        Window::new(native, WindowHandle::from_raw(7), Arc::new(config))
    }

    #[test]
    fn size_command_resizes() {
        let native = LogNative::default();
        let win = window(&native, WindowConfiguration::default());
        let out = execute(&win, &Command::Size { width: 100, height: 50 }).unwrap();
        assert_eq!(out, None);
        assert_eq!(*native.log.borrow(), vec!["pos 0 0 120 70 0x36"]);
    }

    #[test]
    fn center_command_uses_config_size() {
        let native = LogNative::default();
        let win = window(&native, WindowConfiguration::new("t", 500, 300));
        execute(&win, &Command::Center).unwrap();
        assert_eq!(
            native.log.borrow().last().unwrap(),
            "pos 240 340 520 320 0x35"
        );
    }

    #[test]
    fn title_and_show_commands() {
        let native = LogNative::default();
        let win = window(&native, WindowConfiguration::default());
        execute(&win, &Command::Title { text: "Docs".into() }).unwrap();
        execute(&win, &Command::Minimize).unwrap();
        execute(&win, &Command::Restore).unwrap();
        assert_eq!(*native.log.borrow(), vec!["text Docs", "show 6", "show 9"]);
    }

    #[test]
    fn limits_command_prints_frame_sizes() {
        let native = LogNative::default();
        let mut config = WindowConfiguration::default().with_min_size(200, 100);
        config.max_width = Some(1000);
        let win = window(&native, config);
        let out = execute(&win, &Command::Limits).unwrap().unwrap();
        assert_eq!(out, "min: 220 x 120\nmax: 1020 x default");
    }

    #[test]
    fn limits_without_bounds_report_defaults() {
        let native = LogNative::default();
        let win = window(&native, WindowConfiguration::default());
        let out = execute(&win, &Command::Limits).unwrap().unwrap();
        assert_eq!(out, "min: default\nmax: default");
    }
}
