mod desktop;

pub use desktop::DesktopNotifier;
