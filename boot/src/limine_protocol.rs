//! Limine requests: base revision and the kernel command line.

use core::ffi::{c_char, CStr};
use core::ptr;

use croupier_lib::klog_debug;
use limine::request::{RequestsEndMarker, RequestsStartMarker};
use limine::BaseRevision;

const LIMINE_COMMON_MAGIC: [u64; 2] = [0xc7b1dd30df4c8b88, 0x0a82e883a194f07b];
const LIMINE_KERNEL_FILE_ID: [u64; 4] = [
    LIMINE_COMMON_MAGIC[0],
    LIMINE_COMMON_MAGIC[1],
    0xad97e90e83f1ed67,
    0x31eb5d1c5ff23b69,
];

/// Leading fields of a Limine file descriptor; only the command line is read.
#[repr(C)]
struct LimineFile {
    revision: u64,
    address: *const u8,
    size: u64,
    path: *const c_char,
    cmdline: *const c_char,
}

#[repr(C)]
struct LimineKernelFileResponse {
    revision: u64,
    kernel_file: *const LimineFile,
}

#[repr(C)]
struct LimineKernelFileRequest {
    id: [u64; 4],
    revision: u64,
    response: *const LimineKernelFileResponse,
}

impl LimineKernelFileRequest {
    const fn new() -> Self {
        Self {
            id: LIMINE_KERNEL_FILE_ID,
            revision: 0,
            response: ptr::null(),
        }
    }
}

// SAFETY: written once by the bootloader before the kernel runs, read-only
// afterwards.
unsafe impl Sync for LimineKernelFileRequest {}

#[used]
#[unsafe(link_section = ".requests_start_marker")]
static REQUESTS_START_MARKER: RequestsStartMarker = RequestsStartMarker::new();

#[used]
#[unsafe(link_section = ".requests")]
static BASE_REVISION: BaseRevision = BaseRevision::new();

#[used]
#[unsafe(link_section = ".requests")]
static KERNEL_FILE_REQUEST: LimineKernelFileRequest = LimineKernelFileRequest::new();

#[used]
#[unsafe(link_section = ".requests_end_marker")]
static REQUESTS_END_MARKER: RequestsEndMarker = RequestsEndMarker::new();

/// Halt through the panic handler if the bootloader did not accept our
/// base revision; nothing it handed over can be trusted then.
pub fn ensure_base_revision() {
    if !BASE_REVISION.is_supported() {
        panic!("Limine base revision not supported");
    }
}

/// The command line the kernel was booted with, if it is valid UTF-8.
pub fn kernel_cmdline() -> Option<&'static str> {
    // SAFETY: the bootloader fills `response` before entry; a volatile read
    // keeps the compiler from assuming the initializer's null.
    let response = unsafe { ptr::read_volatile(&raw const KERNEL_FILE_REQUEST.response) };
    // SAFETY: a non-null response and file point at bootloader-reclaimable
    // memory that stays mapped for the kernel's lifetime.
    let file = unsafe { response.as_ref()?.kernel_file.as_ref()? };
    if file.cmdline.is_null() {
        return None;
    }
    // SAFETY: Limine command lines are NUL-terminated.
    let cmdline = unsafe { CStr::from_ptr(file.cmdline) }.to_str().ok()?;
    klog_debug!("BOOT: cmdline \"{}\"", cmdline);
    Some(cmdline)
}
