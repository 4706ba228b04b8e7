//! Capacitor configuration and CLI invocations

use pwa_core::config::ProjectConfig;
use pwa_core::process::CommandSpec;
use std::fmt::Write;

/// File Capacitor reads its configuration from
pub const CAPACITOR_CONFIG_FILE: &str = "capacitor.config.ts";

/// Render `capacitor.config.ts` for the project
pub fn render_capacitor_config(config: &ProjectConfig) -> String {
    let mut out = String::new();
    out.push_str("import type { CapacitorConfig } from '@capacitor/cli';\n\n");
    out.push_str("const config: CapacitorConfig = {\n");
    let _ = writeln!(out, "  appId: '{}',", ts_escape(&config.app_id));
    let _ = writeln!(out, "  appName: '{}',", ts_escape(&config.app_name));
    let _ = writeln!(out, "  webDir: '{}',", ts_escape(&config.web_dir));
    out.push_str("  server: {\n    androidScheme: 'https'\n  },\n");
    out.push_str("  android: {\n");
    let _ = writeln!(out, "    allowMixedContent: {},", config.android.allow_mixed_content);
    let _ = writeln!(out, "    backgroundColor: '{}',", ts_escape(&config.background_color));
    let _ = writeln!(
        out,
        "    webContentsDebuggingEnabled: {}",
        config.android.web_contents_debugging_enabled
    );
    out.push_str("  }");

    let notifications = &config.plugins.notifications;
    if notifications.enabled {
        out.push_str(",\n  plugins: {\n    LocalNotifications: {\n");
        let _ = writeln!(out, "      smallIcon: '{}',", ts_escape(&notifications.small_icon));
        let _ = writeln!(out, "      iconColor: '{}',", ts_escape(&notifications.icon_color));
        let _ = writeln!(out, "      sound: '{}',", ts_escape(&notifications.sound));
        out.push_str("      requestPermissions: true,\n");
        out.push_str("      alwaysShowNotification: false,\n");
        out.push_str("      autoCancel: true\n");
        out.push_str("    }\n  }");
    }

    out.push_str("\n};\n\nexport default config;\n");
    out
}

/// Escape a value for a single-quoted TypeScript string literal
fn ts_escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn npx_cap<'a>(args: impl IntoIterator<Item = &'a str>) -> CommandSpec {
    CommandSpec::new("npx", std::iter::once("cap").chain(args))
}

/// `npx cap add android`
pub fn add_platform() -> CommandSpec {
    npx_cap(["add", "android"])
}

/// `npx cap sync android`
pub fn sync_platform() -> CommandSpec {
    npx_cap(["sync", "android"])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pwa_core::process::OutputMode;

    fn config() -> ProjectConfig {
        ProjectConfig {
            app_name: "Demo".to_string(),
            app_id: "com.example.app".to_string(),
            ..ProjectConfig::default()
        }
    }

    #[test]
    fn test_render_defaults() {
        let rendered = render_capacitor_config(&config());
        let expected = "\
import type { CapacitorConfig } from '@capacitor/cli';

const config: CapacitorConfig = {
  appId: 'com.example.app',
  appName: 'Demo',
  webDir: 'www',
  server: {
    androidScheme: 'https'
  },
  android: {
    allowMixedContent: true,
    backgroundColor: '#ffffff',
    webContentsDebuggingEnabled: true
  }
};

export default config;
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_with_notifications() {
        let mut config = config();
        config.plugins.notifications.enabled = true;
        config.plugins.notifications.icon_color = "#FF0000".to_string();

        let rendered = render_capacitor_config(&config);
        assert!(rendered.contains("  plugins: {\n    LocalNotifications: {\n"));
        assert!(rendered.contains("smallIcon: 'ic_stat_notification',"));
        assert!(rendered.contains("iconColor: '#FF0000',"));
        assert!(rendered.contains("sound: 'notification_sound.wav',"));
        assert!(rendered.contains("requestPermissions: true,"));
        assert!(rendered.contains("autoCancel: true\n    }\n  }\n};"));
    }

    #[test]
    fn test_render_honours_flags() {
        let mut config = config();
        config.android.allow_mixed_content = false;
        config.android.web_contents_debugging_enabled = false;

        let rendered = render_capacitor_config(&config);
        assert!(rendered.contains("allowMixedContent: false,"));
        assert!(rendered.contains("webContentsDebuggingEnabled: false\n"));
        assert!(!rendered.contains("plugins"));
    }

    #[test]
    fn test_render_escapes_quotes() {
        let mut config = config();
        config.app_name = "Bob's App".to_string();
        config.web_dir = r"build\www".to_string();

        let rendered = render_capacitor_config(&config);
        assert!(rendered.contains(r"  appName: 'Bob\'s App',"));
        assert!(rendered.contains(r"  webDir: 'build\\www',"));
    }

    #[test]
    fn test_ts_escape() {
        assert_eq!(ts_escape("plain"), "plain");
        assert_eq!(ts_escape("a'b"), r"a\'b");
        assert_eq!(ts_escape(r"a\b"), r"a\\b");
        assert_eq!(ts_escape("a\nb"), r"a\nb");
    }

    #[test]
    fn test_cap_commands() {
        let add = add_platform();
        assert_eq!(add.program, "npx");
        assert_eq!(add.args, vec!["cap", "add", "android"]);
        assert_eq!(add.output, OutputMode::Inherit);
        assert_eq!(sync_platform().to_string(), "npx cap sync android");
    }
}
