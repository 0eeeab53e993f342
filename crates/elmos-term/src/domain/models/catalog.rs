use super::ActionId;
use super::ConsoleError;
use super::MenuNode;
use super::MenuTree;

/// Builds the console's menu. `program` is the executor shown in command hints.
pub fn build_menu(program: &str) -> Result<MenuTree, ConsoleError> {
    let cmd = |args: &str| return format!("{program} {args}");
    let run = |label: &str, desc: &str, action: ActionId, args: &str| {
        return MenuNode::action(label, desc, action, &cmd(args));
    };

    return MenuTree::new(vec![
        MenuNode::category(
            "Workspace",
            "Initialize and manage workspace",
            vec![
                run("Initialize", "Create image & mount", ActionId::InitWorkspace, "init"),
                run("Status", "Show workspace status", ActionId::WorkspaceStatus, "status"),
                run("Exit", "Unmount & cleanup", ActionId::WorkspaceExit, "exit"),
            ],
        ),
        MenuNode::category(
            "Arch",
            "Set target architecture",
            vec![
                run("Show", "Show current config", ActionId::ArchShow, "arch show"),
                run("Set", "Set architecture", ActionId::ArchSet, "arch <target>")
                    .with_input("Architecture (arm64/arm/riscv):", "arm64"),
            ],
        ),
        MenuNode::category(
            "Kernel",
            "Configure and build Linux kernel",
            vec![
                run("Status", "Show kernel status", ActionId::KernelStatus, "kernel status"),
                run("Clone", "Download source", ActionId::KernelClone, "kernel clone"),
                run("Pull", "Update source", ActionId::KernelPull, "kernel pull"),
                run("Switch", "Checkout ref", ActionId::KernelSwitch, "kernel switch <ref>")
                    .with_input("Branch/Tag (? for list):", "v6.7"),
                run("Reset", "Reclone source", ActionId::KernelReset, "kernel reset"),
                run("Config", "Configure kernel", ActionId::KernelConfig, "kernel config <type>")
                    .with_input("Config (defconfig/tinyconfig/menuconfig):", "defconfig"),
                run(
                    "Menuconfig",
                    "Interactive kernel configurator",
                    ActionId::KernelMenuconfig,
                    "kernel config menuconfig",
                )
                .interactive(),
                run("Build", "Compile kernel", ActionId::KernelBuild, "kernel build"),
                run("Clean", "Remove artifacts", ActionId::KernelClean, "kernel clean"),
            ],
        ),
        MenuNode::category(
            "Modules",
            "Manage kernel modules",
            vec![
                run("List", "Show modules", ActionId::ModuleList, "module list"),
                run("Build All", "Build every module", ActionId::ModuleBuild, "module build"),
                run("Build One", "Build a single module", ActionId::ModuleBuildOne, "module build <name>")
                    .with_input("Module name:", "hello_world"),
                run("New", "Create module", ActionId::ModuleNew, "module new <name>")
                    .with_input("Module name:", "hello_world"),
                run("Clean", "Remove binaries", ActionId::ModuleClean, "module clean"),
            ],
        ),
        MenuNode::category(
            "Apps",
            "Manage userspace apps",
            vec![
                run("List", "Show apps", ActionId::AppList, "app list"),
                run("Build All", "Build every app", ActionId::AppBuild, "app build"),
                run("Build One", "Build a single app", ActionId::AppBuildOne, "app build <name>")
                    .with_input("App name:", "hello_app"),
                run("New", "Create app", ActionId::AppNew, "app new <name>")
                    .with_input("App name:", "hello_app"),
                run("Clean", "Remove binaries", ActionId::AppClean, "app clean"),
            ],
        ),
        MenuNode::category(
            "QEMU",
            "Run kernel in emulator",
            vec![
                run("Run", "Boot kernel", ActionId::QemuRun, "qemu run").interactive(),
                run("Debug", "With GDB server", ActionId::QemuDebug, "qemu debug").interactive(),
            ],
        ),
        run("GDB", "Connect debugger", ActionId::GdbConnect, "gdb").interactive(),
        MenuNode::category(
            "RootFS",
            "Manage root filesystem",
            vec![
                run("Status", "Show rootfs status", ActionId::RootfsStatus, "rootfs status"),
                run("Create", "Create rootfs (default size)", ActionId::RootfsCreate, "rootfs create"),
                run(
                    "Create Custom",
                    "Create rootfs with a size",
                    ActionId::RootfsCreateCustom,
                    "rootfs create -s <size>",
                )
                .with_input("Size (e.g. 5G):", "5G"),
                run("Clean", "Remove rootfs", ActionId::RootfsClean, "rootfs clean"),
            ],
        ),
        MenuNode::category(
            "Config",
            "Show and change settings",
            vec![
                run("Show", "Show configuration", ActionId::ConfigShow, "config show"),
                run("Arch", "Set target architecture", ActionId::ConfigArch, "config set arch <value>")
                    .with_input("Architecture:", "arm64"),
                run("Jobs", "Set parallel build jobs", ActionId::ConfigJobs, "config set jobs <value>")
                    .with_input("Jobs:", "8"),
                run(
                    "Memory",
                    "Set emulator memory",
                    ActionId::ConfigMemory,
                    "config set memory <value>",
                )
                .with_input("Memory:", "2G"),
            ],
        ),
        run("Doctor", "Check environment", ActionId::DoctorCheck, "doctor"),
        MenuNode::category(
            "Toolchains",
            "Manage cross-compiler toolchains",
            vec![
                run("Status", "Show installed toolchains", ActionId::ToolchainStatus, "toolchains status"),
                run("Install", "Install crosstool-ng", ActionId::ToolchainInstall, "toolchains install"),
                run("List", "List available targets", ActionId::ToolchainList, "toolchains list"),
                run("Select", "Select toolchain target", ActionId::ToolchainSelect, "toolchains <target>")
                    .with_input(
                        "Target (e.g. riscv64-unknown-linux-gnu):",
                        "riscv64-unknown-linux-gnu",
                    ),
                run("Build", "Build selected toolchain", ActionId::ToolchainBuild, "toolchains build"),
                run("Env", "Show env variables", ActionId::ToolchainEnv, "toolchains env"),
                run(
                    "Menuconfig",
                    "Configure toolchain",
                    ActionId::ToolchainMenuconfig,
                    "toolchains menuconfig",
                )
                .interactive(),
                run("Clean", "Clean toolchain build", ActionId::ToolchainClean, "toolchains clean"),
            ],
        ),
    ]);
}
