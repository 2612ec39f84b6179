pub const PAGE: &str = "min-h-screen w-full bg-black text-white font-sans";
pub const SECTION: &str = "py-20 px-4 sm:px-6 lg:px-8";
pub const SECTION_DARK: &str = "py-20 px-4 sm:px-6 lg:px-8 bg-neutral-950";
pub const CONTAINER_LG: &str = "max-w-7xl mx-auto";
pub const NAV: &str = "fixed top-0 z-50 w-full transition-all duration-300";
pub const NAV_SCROLLED: &str = "bg-black/90 backdrop-blur-md shadow-lg shadow-red-900/20 border-b border-[#D4AF37]/30";
pub const NAV_TOP: &str = "bg-transparent";
pub const NAV_INNER: &str = "max-w-7xl mx-auto h-16 px-4 sm:px-6 lg:px-8 flex items-center justify-between";
pub const NAV_BRAND: &str = "flex items-center text-2xl font-bold text-white";
pub const NAV_LINK: &str = "relative px-3 py-2 text-sm font-medium text-gray-200 hover:text-[#D4AF37] transition-colors duration-200";
pub const NAV_MOBILE: &str = "md:hidden bg-black/95 border-t border-[#D4AF37]/30 px-4 py-3 space-y-1";
pub const NAV_MOBILE_LINK: &str = "block px-3 py-2 rounded-md text-base font-medium text-gray-200 hover:bg-red-900/40 hover:text-[#D4AF37]";
pub const BUTTON_ICON: &str = "p-2 text-white hover:text-[#D4AF37] rounded-lg transition-colors duration-200";

pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center px-6 py-3 rounded-full font-bold text-white bg-gradient-to-r from-red-600 to-red-800 hover:from-red-500 hover:to-red-700 shadow-lg shadow-red-900/40 transition-all duration-300 disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_GOLD: &str = "inline-flex items-center justify-center px-6 py-3 rounded-full font-bold text-black bg-gradient-to-r from-[#D4AF37] to-yellow-500 hover:from-yellow-400 hover:to-[#D4AF37] shadow-lg shadow-yellow-900/30 transition-all duration-300 disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_SECONDARY: &str = "inline-flex items-center justify-center px-6 py-3 rounded-full font-medium border border-[#D4AF37] text-[#D4AF37] hover:bg-[#D4AF37] hover:text-black transition-colors duration-300";
pub const BUTTON_SMALL: &str = "inline-flex items-center justify-center w-8 h-8 rounded-full border border-gray-600 text-white hover:border-[#D4AF37] hover:text-[#D4AF37] transition-colors";
pub const TAB_ACTIVE: &str = "px-6 py-2 rounded-full font-bold bg-red-700 text-white";
pub const TAB_INACTIVE: &str = "px-6 py-2 rounded-full font-medium text-gray-300 hover:text-white hover:bg-white/10";
pub const CHIP_ACTIVE: &str = "px-4 py-1.5 rounded-full text-sm font-semibold bg-[#D4AF37] text-black";
pub const CHIP_INACTIVE: &str = "px-4 py-1.5 rounded-full text-sm font-medium border border-gray-700 text-gray-300 hover:border-[#D4AF37]";

pub const CARD: &str = "bg-neutral-900 rounded-2xl border border-neutral-800 shadow-xl p-6";
pub const CARD_HOVER: &str = "bg-neutral-900 rounded-2xl border border-neutral-800 shadow-xl overflow-hidden transform hover:-translate-y-1 hover:border-[#D4AF37]/60 transition-all duration-300";
pub const CARD_RESULT: &str = "bg-gradient-to-br from-red-900/60 to-black rounded-2xl border border-[#D4AF37]/60 p-6 text-center";
pub const BADGE: &str = "absolute top-3 left-3 px-3 py-1 rounded-full text-xs font-bold bg-red-600 text-white";

pub const INPUT: &str = "mt-2 block w-full rounded-lg border-0 bg-neutral-800 py-2 px-3 text-white shadow-sm ring-1 ring-inset ring-neutral-700 placeholder:text-gray-500 focus:ring-2 focus:ring-[#D4AF37]";
pub const INPUT_ERROR: &str = "mt-2 block w-full rounded-lg border-0 bg-neutral-800 py-2 px-3 text-white shadow-sm ring-2 ring-inset ring-red-500 focus:ring-2 focus:ring-red-500";
pub const FORM: &str = "mt-4 space-y-4";

pub const TEXT_TITLE: &str = "text-4xl md:text-5xl font-bold text-white";
pub const TEXT_ACCENT: &str = "text-[#D4AF37]";
pub const TEXT_H3: &str = "text-xl font-bold text-white";
pub const TEXT_BODY: &str = "text-gray-300";
pub const TEXT_SMALL: &str = "text-sm text-gray-400";
pub const TEXT_ERROR: &str = "text-sm text-red-400";
pub const TEXT_LABEL: &str = "block text-sm font-medium text-gray-200";
pub const TEXT_PRICE: &str = "text-lg font-bold text-[#D4AF37]";

pub const MODAL_BACKDROP: &str = "fixed inset-0 z-50 flex items-center justify-center bg-black/80 backdrop-blur-sm px-4";
pub const MODAL: &str = "w-full max-w-md bg-neutral-900 rounded-2xl border border-[#D4AF37]/40 shadow-2xl p-6";

pub const STEP_ACTIVE: &str = "flex items-center justify-center w-10 h-10 rounded-full bg-red-700 text-white font-bold";
pub const STEP_DONE: &str = "flex items-center justify-center w-10 h-10 rounded-full bg-[#D4AF37] text-black font-bold";
pub const STEP_PENDING: &str = "flex items-center justify-center w-10 h-10 rounded-full bg-neutral-800 text-gray-400 font-bold";

pub const TABLE_AVAILABLE: &str = "absolute flex items-center justify-center rounded-lg text-xs font-bold cursor-pointer bg-green-700/80 hover:bg-green-600 text-white transition-colors";
pub const TABLE_SELECTED: &str = "absolute flex items-center justify-center rounded-lg text-xs font-bold cursor-pointer bg-[#D4AF37] text-black ring-2 ring-white";
pub const TABLE_OCCUPIED: &str = "absolute flex items-center justify-center rounded-lg text-xs font-bold cursor-not-allowed bg-red-900/70 text-gray-300";

pub const FOOTER: &str = "w-full bg-neutral-950 border-t border-[#D4AF37]/30";
pub const FOOTER_LINK: &str = "text-sm font-medium text-gray-400 hover:text-[#D4AF37] transition-colors duration-200";
