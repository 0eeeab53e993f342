#[cfg(test)]
#[path = "action_id_test.rs"]
mod tests;

use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Identifier of every action the external executor understands.
///
/// The serialized form is the identifier used in menu definitions and logs.
/// `invoke` is an exhaustive match, so adding a variant without an argument
/// vector fails to compile instead of failing at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
pub enum ActionId {
    #[strum(serialize = "init:workspace")]
    InitWorkspace,
    #[strum(serialize = "workspace:status")]
    WorkspaceStatus,
    #[strum(serialize = "workspace:exit")]
    WorkspaceExit,

    #[strum(serialize = "arch:show")]
    ArchShow,
    #[strum(serialize = "arch:set")]
    ArchSet,

    #[strum(serialize = "kernel:status")]
    KernelStatus,
    #[strum(serialize = "kernel:clone")]
    KernelClone,
    #[strum(serialize = "kernel:pull")]
    KernelPull,
    #[strum(serialize = "kernel:switch")]
    KernelSwitch,
    #[strum(serialize = "kernel:reset")]
    KernelReset,
    #[strum(serialize = "kernel:config")]
    KernelConfig,
    #[strum(serialize = "kernel:menuconfig")]
    KernelMenuconfig,
    #[strum(serialize = "kernel:build")]
    KernelBuild,
    #[strum(serialize = "kernel:clean")]
    KernelClean,

    #[strum(serialize = "module:list")]
    ModuleList,
    #[strum(serialize = "module:build")]
    ModuleBuild,
    #[strum(serialize = "module:build:one")]
    ModuleBuildOne,
    #[strum(serialize = "module:new")]
    ModuleNew,
    #[strum(serialize = "module:clean")]
    ModuleClean,

    #[strum(serialize = "app:list")]
    AppList,
    #[strum(serialize = "app:build")]
    AppBuild,
    #[strum(serialize = "app:build:one")]
    AppBuildOne,
    #[strum(serialize = "app:new")]
    AppNew,
    #[strum(serialize = "app:clean")]
    AppClean,

    #[strum(serialize = "qemu:run")]
    QemuRun,
    #[strum(serialize = "qemu:debug")]
    QemuDebug,
    #[strum(serialize = "gdb:connect")]
    GdbConnect,

    #[strum(serialize = "rootfs:status")]
    RootfsStatus,
    #[strum(serialize = "rootfs:create")]
    RootfsCreate,
    #[strum(serialize = "rootfs:create:custom")]
    RootfsCreateCustom,
    #[strum(serialize = "rootfs:clean")]
    RootfsClean,

    #[strum(serialize = "config:show")]
    ConfigShow,
    #[strum(serialize = "config:arch")]
    ConfigArch,
    #[strum(serialize = "config:jobs")]
    ConfigJobs,
    #[strum(serialize = "config:memory")]
    ConfigMemory,

    #[strum(serialize = "doctor:check")]
    DoctorCheck,

    #[strum(serialize = "toolchain:status")]
    ToolchainStatus,
    #[strum(serialize = "toolchain:install")]
    ToolchainInstall,
    #[strum(serialize = "toolchain:list")]
    ToolchainList,
    #[strum(serialize = "toolchain:select")]
    ToolchainSelect,
    #[strum(serialize = "toolchain:build")]
    ToolchainBuild,
    #[strum(serialize = "toolchain:env")]
    ToolchainEnv,
    #[strum(serialize = "toolchain:menuconfig")]
    ToolchainMenuconfig,
    #[strum(serialize = "toolchain:clean")]
    ToolchainClean,
}

/// Kernel configurators that draw their own curses or GUI frontend.
const TERMINAL_CONFIGURATORS: [&str; 4] = ["menuconfig", "nconfig", "xconfig", "gconfig"];

/// Value typed at the kernel switch prompt to list refs instead of switching.
pub const LIST_REFS_QUERY: &str = "?";

fn words(items: &[&str]) -> Vec<String> {
    return items.iter().map(|e| return e.to_string()).collect();
}

fn with_value(items: &[&str], value: &str) -> Vec<String> {
    let mut args = words(items);
    if !value.is_empty() {
        args.push(value.to_string());
    }

    return args;
}

impl ActionId {
    /// Maps the action and an optional captured value (empty when absent) to
    /// the argument vector handed to the executor.
    pub fn invoke(self, value: &str) -> Vec<String> {
        let value = value.trim();
        return match self {
            ActionId::InitWorkspace => words(&["init"]),
            ActionId::WorkspaceStatus => words(&["status"]),
            ActionId::WorkspaceExit => words(&["exit"]),

            ActionId::ArchShow => words(&["arch", "show"]),
            ActionId::ArchSet => with_value(&["arch"], value),

            ActionId::KernelStatus => words(&["kernel", "status"]),
            ActionId::KernelClone => words(&["kernel", "clone"]),
            ActionId::KernelPull => words(&["kernel", "pull"]),
            ActionId::KernelSwitch => {
                if value == LIST_REFS_QUERY {
                    words(&["kernel", "switch"])
                } else {
                    with_value(&["kernel", "switch"], value)
                }
            }
            ActionId::KernelReset => words(&["kernel", "reset"]),
            ActionId::KernelConfig => {
                if value == "defconfig" {
                    words(&["kernel", "config"])
                } else {
                    with_value(&["kernel", "config"], value)
                }
            }
            ActionId::KernelMenuconfig => words(&["kernel", "config", "menuconfig"]),
            ActionId::KernelBuild => words(&["kernel", "build"]),
            ActionId::KernelClean => words(&["kernel", "clean"]),

            ActionId::ModuleList => words(&["module", "list"]),
            ActionId::ModuleBuild => words(&["module", "build"]),
            ActionId::ModuleBuildOne => with_value(&["module", "build"], value),
            ActionId::ModuleNew => with_value(&["module", "new"], value),
            ActionId::ModuleClean => words(&["module", "clean"]),

            ActionId::AppList => words(&["app", "list"]),
            ActionId::AppBuild => words(&["app", "build"]),
            ActionId::AppBuildOne => with_value(&["app", "build"], value),
            ActionId::AppNew => with_value(&["app", "new"], value),
            ActionId::AppClean => words(&["app", "clean"]),

            ActionId::QemuRun => words(&["qemu", "run"]),
            ActionId::QemuDebug => words(&["qemu", "debug"]),
            ActionId::GdbConnect => words(&["gdb"]),

            ActionId::RootfsStatus => words(&["rootfs", "status"]),
            ActionId::RootfsCreate => words(&["rootfs", "create"]),
            ActionId::RootfsCreateCustom => with_value(&["rootfs", "create", "-s"], value),
            ActionId::RootfsClean => words(&["rootfs", "clean"]),

            ActionId::ConfigShow => words(&["config", "show"]),
            ActionId::ConfigArch => with_value(&["config", "set", "arch"], value),
            ActionId::ConfigJobs => with_value(&["config", "set", "jobs"], value),
            ActionId::ConfigMemory => with_value(&["config", "set", "memory"], value),

            ActionId::DoctorCheck => words(&["doctor"]),

            ActionId::ToolchainStatus => words(&["toolchains", "status"]),
            ActionId::ToolchainInstall => words(&["toolchains", "install"]),
            ActionId::ToolchainList => words(&["toolchains", "list"]),
            ActionId::ToolchainSelect => with_value(&["toolchains"], value),
            ActionId::ToolchainBuild => words(&["toolchains", "build"]),
            ActionId::ToolchainEnv => words(&["toolchains", "env"]),
            ActionId::ToolchainMenuconfig => words(&["toolchains", "menuconfig"]),
            ActionId::ToolchainClean => words(&["toolchains", "clean"]),
        };
    }

    /// Whether a captured value turns this action into one that needs the
    /// whole terminal, regardless of how its menu node is flagged.
    pub fn requires_terminal(self, value: &str) -> bool {
        if self == ActionId::KernelConfig {
            return TERMINAL_CONFIGURATORS.contains(&value.trim());
        }

        return false;
    }

    pub fn parse(s: &str) -> Option<ActionId> {
        return s.parse::<ActionId>().ok();
    }

    pub fn as_str(self) -> &'static str {
        return self.into();
    }
}
