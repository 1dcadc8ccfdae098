/* ************************************************************************ **
** This file is part of orbis, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
**                                                                          **
** Be aware that not all of orbis is provided under this permissive         **
** license, and that the project as a whole is licensed under the GPL 3.0.  **
** ************************************************************************ */

/// Invokes a callback macro once for each brace-delimited group of tokens.
///
/// This is all we need to stamp out near-identical impls for `V2`/`V3`
/// and `M22`/`M33` without a trait for every little thing.
macro_rules! gen_each {
    (
        [$($group:tt)*]
        $mac:ident!($($mac_match:tt)*) => {$($mac_body:tt)*}$(;)*
    ) => {
        macro_rules! $mac {
            ($($mac_match)*) => {$($mac_body)*};
        }
        gen_each!(@call $mac [$($group)*]);
    };

    (@call $mac:ident [$({$($args:tt)*})*]) => {
        $( $mac!{$($args)*} )*
    };
}
