// Fallback declarations - visa-sdk feature not enabled
//
// These mirror the core of visatype.h/visa.h so that dependents type-check
// without a VISA installation (`--no-default-features`). The default
// `visa-sdk` feature generates the real declarations from the installed header
// and links the VISA library.
//
// Functions keep the VISA signatures but panic when called.

#![allow(clippy::panic)]

use std::os::raw::{c_char, c_uchar, c_void};

pub type ViUInt32 = u32;
pub type ViInt32 = i32;
pub type ViUInt16 = u16;
pub type ViInt16 = i16;
pub type ViUInt8 = u8;
pub type ViInt8 = i8;
pub type ViChar = c_char;
pub type ViByte = c_uchar;
pub type ViBoolean = ViUInt16;
pub type ViAddr = *mut c_void;

pub type ViStatus = ViInt32;
pub type ViObject = ViUInt32;
pub type ViSession = ViObject;
pub type ViFindList = ViObject;
pub type ViEvent = ViObject;
pub type ViEventType = ViUInt32;
pub type ViEventFilter = ViUInt32;
pub type ViJobId = ViUInt32;
pub type ViAttr = ViUInt32;
pub type ViAccessMode = ViUInt32;

#[cfg(target_pointer_width = "64")]
pub type ViAttrState = u64;
#[cfg(not(target_pointer_width = "64"))]
pub type ViAttrState = ViUInt32;

pub type ViString = *mut ViChar;
pub type ViConstString = *const ViChar;
pub type ViRsrc = ViString;
pub type ViConstRsrc = ViConstString;
pub type ViKeyId = ViString;
pub type ViConstKeyId = ViConstString;
pub type ViBuf = *mut ViByte;
pub type ViPBuf = *mut ViByte;
pub type ViConstBuf = *const ViByte;
pub type ViPSession = *mut ViSession;
pub type ViPFindList = *mut ViFindList;
pub type ViPUInt32 = *mut ViUInt32;
pub type ViPUInt16 = *mut ViUInt16;
pub type ViPEvent = *mut ViEvent;
pub type ViPEventType = *mut ViEventType;

// Completion and error codes
const _VI_ERROR: ViStatus = i32::MIN;

pub const VI_SUCCESS: ViStatus = 0;
pub const VI_SUCCESS_MAX_CNT: ViStatus = 0x3FFF0006;
pub const VI_ERROR_INV_OBJECT: ViStatus = _VI_ERROR + 0x3FFF000E;
pub const VI_ERROR_RSRC_LOCKED: ViStatus = _VI_ERROR + 0x3FFF000F;
pub const VI_ERROR_RSRC_NFOUND: ViStatus = _VI_ERROR + 0x3FFF0011;
pub const VI_ERROR_INV_RSRC_NAME: ViStatus = _VI_ERROR + 0x3FFF0012;
pub const VI_ERROR_TMO: ViStatus = _VI_ERROR + 0x3FFF0015;
pub const VI_ERROR_NSUP_OPER: ViStatus = _VI_ERROR + 0x3FFF0067;

// Misc
pub const VI_NULL: ViUInt32 = 0;
pub const VI_TRUE: ViBoolean = 1;
pub const VI_FALSE: ViBoolean = 0;
pub const VI_FIND_BUFLEN: ViUInt32 = 256;
pub const VI_TMO_IMMEDIATE: ViUInt32 = 0;
pub const VI_TMO_INFINITE: ViUInt32 = 0xFFFF_FFFF;

// Access modes
pub const VI_NO_LOCK: ViAccessMode = 0;
pub const VI_EXCLUSIVE_LOCK: ViAccessMode = 1;
pub const VI_SHARED_LOCK: ViAccessMode = 2;
pub const VI_LOAD_CONFIG: ViAccessMode = 4;

// Attributes
pub const VI_ATTR_RSRC_NAME: ViAttr = 0xBFFF_0002;
pub const VI_ATTR_TERMCHAR: ViAttr = 0x3FFF_0018;
pub const VI_ATTR_TMO_VALUE: ViAttr = 0x3FFF_001A;
pub const VI_ATTR_TERMCHAR_EN: ViAttr = 0x3FFF_0038;

// Interface types
pub const VI_INTF_GPIB: ViUInt16 = 1;
pub const VI_INTF_VXI: ViUInt16 = 2;
pub const VI_INTF_GPIB_VXI: ViUInt16 = 3;
pub const VI_INTF_ASRL: ViUInt16 = 4;
pub const VI_INTF_PXI: ViUInt16 = 5;
pub const VI_INTF_TCPIP: ViUInt16 = 6;
pub const VI_INTF_USB: ViUInt16 = 7;

// Events
pub const VI_EVENT_IO_COMPLETION: ViEventType = 0x3FFF_2009;
pub const VI_ALL_ENABLED_EVENTS: ViEventType = 0x3FFF_7FFF;
pub const VI_QUEUE: ViUInt16 = 1;
pub const VI_HNDLR: ViUInt16 = 2;
pub const VI_SUSPEND_HNDLR: ViUInt16 = 4;
pub const VI_ALL_MECH: ViUInt16 = 0xFFFF;

const VISA_SDK_PANIC_MSG: &str = "VISA function called but visa-sdk feature is not enabled. \
    Enable the visa-sdk feature of visa-sys to bind against the installed VISA library.";

pub unsafe fn viOpenDefaultRM(_vi: ViPSession) -> ViStatus {
    panic!("{}", VISA_SDK_PANIC_MSG);
}

pub unsafe fn viFindRsrc(
    _sesn: ViSession,
    _expr: ViConstString,
    _vi: ViPFindList,
    _ret_cnt: ViPUInt32,
    _desc: *mut ViChar,
) -> ViStatus {
    panic!("{}", VISA_SDK_PANIC_MSG);
}

pub unsafe fn viFindNext(_vi: ViFindList, _desc: *mut ViChar) -> ViStatus {
    panic!("{}", VISA_SDK_PANIC_MSG);
}

pub unsafe fn viParseRsrc(
    _rm_sesn: ViSession,
    _rsrc_name: ViConstRsrc,
    _intf_type: ViPUInt16,
    _intf_num: ViPUInt16,
) -> ViStatus {
    panic!("{}", VISA_SDK_PANIC_MSG);
}

pub unsafe fn viOpen(
    _sesn: ViSession,
    _name: ViConstRsrc,
    _mode: ViAccessMode,
    _timeout: ViUInt32,
    _vi: ViPSession,
) -> ViStatus {
    panic!("{}", VISA_SDK_PANIC_MSG);
}

pub unsafe fn viClose(_vi: ViObject) -> ViStatus {
    panic!("{}", VISA_SDK_PANIC_MSG);
}

pub unsafe fn viSetAttribute(
    _vi: ViObject,
    _attr_name: ViAttr,
    _attr_value: ViAttrState,
) -> ViStatus {
    panic!("{}", VISA_SDK_PANIC_MSG);
}

pub unsafe fn viGetAttribute(
    _vi: ViObject,
    _attr_name: ViAttr,
    _attr_value: *mut c_void,
) -> ViStatus {
    panic!("{}", VISA_SDK_PANIC_MSG);
}

pub unsafe fn viStatusDesc(
    _vi: ViObject,
    _status: ViStatus,
    _desc: *mut ViChar,
) -> ViStatus {
    panic!("{}", VISA_SDK_PANIC_MSG);
}

pub unsafe fn viTerminate(
    _vi: ViObject,
    _degree: ViUInt16,
    _job_id: ViJobId,
) -> ViStatus {
    panic!("{}", VISA_SDK_PANIC_MSG);
}

pub unsafe fn viLock(
    _vi: ViSession,
    _lock_type: ViAccessMode,
    _timeout: ViUInt32,
    _requested_key: ViConstKeyId,
    _access_key: *mut ViChar,
) -> ViStatus {
    panic!("{}", VISA_SDK_PANIC_MSG);
}

pub unsafe fn viUnlock(_vi: ViSession) -> ViStatus {
    panic!("{}", VISA_SDK_PANIC_MSG);
}

pub unsafe fn viEnableEvent(
    _vi: ViSession,
    _event_type: ViEventType,
    _mechanism: ViUInt16,
    _context: ViEventFilter,
) -> ViStatus {
    panic!("{}", VISA_SDK_PANIC_MSG);
}

pub unsafe fn viDisableEvent(
    _vi: ViSession,
    _event_type: ViEventType,
    _mechanism: ViUInt16,
) -> ViStatus {
    panic!("{}", VISA_SDK_PANIC_MSG);
}

pub unsafe fn viDiscardEvents(
    _vi: ViSession,
    _event_type: ViEventType,
    _mechanism: ViUInt16,
) -> ViStatus {
    panic!("{}", VISA_SDK_PANIC_MSG);
}

pub unsafe fn viWaitOnEvent(
    _vi: ViSession,
    _in_event_type: ViEventType,
    _timeout: ViUInt32,
    _out_event_type: ViPEventType,
    _out_context: ViPEvent,
) -> ViStatus {
    panic!("{}", VISA_SDK_PANIC_MSG);
}

pub unsafe fn viRead(
    _vi: ViSession,
    _buf: ViPBuf,
    _cnt: ViUInt32,
    _ret_cnt: ViPUInt32,
) -> ViStatus {
    panic!("{}", VISA_SDK_PANIC_MSG);
}

pub unsafe fn viWrite(
    _vi: ViSession,
    _buf: ViConstBuf,
    _cnt: ViUInt32,
    _ret_cnt: ViPUInt32,
) -> ViStatus {
    panic!("{}", VISA_SDK_PANIC_MSG);
}

pub unsafe fn viClear(_vi: ViSession) -> ViStatus {
    panic!("{}", VISA_SDK_PANIC_MSG);
}
