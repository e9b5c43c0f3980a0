//! Environment tweaks applied before the webview starts.

/// Works around WebKitGTK compositing crashes seen with the Nvidia
/// proprietary driver under Wayland by turning off the DMA-BUF
/// renderer. Must run before the first window is created; the variable
/// is ignored once WebKit has initialized.
pub fn apply_linux_patches() {
  #[cfg(target_os = "linux")]
  if nvidia_on_wayland() {
    log::info!("system: disabling WebKit DMA-BUF renderer (Nvidia + Wayland)");
    std::env::set_var("WEBKIT_DISABLE_DMABUF_RENDERER", "1");
  }
}

#[cfg(target_os = "linux")]
fn nvidia_on_wayland() -> bool {
  use std::path::Path;

  let wayland = std::env::var("WAYLAND_DISPLAY").is_ok()
    || std::env::var("XDG_SESSION_TYPE").map(|v| v.eq_ignore_ascii_case("wayland")).unwrap_or(false);

  let nvidia = Path::new("/sys/module/nvidia").exists() || Path::new("/proc/driver/nvidia").exists();

  wayland && nvidia
}
