/// NativeToolProbe port for checking whether the conda tool is usable.
///
/// Implementations must not raise: a missing binary, a non-zero exit or a
/// timeout all simply report `false`. The resolver probes once at
/// construction time and folds the answer into its advisory output.
pub trait NativeToolProbe {
    /// Returns true when the native-channel tool responds to its version
    /// command.
    fn is_available(&self) -> bool;
}
