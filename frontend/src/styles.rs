pub const PAGE: &str = "min-h-screen flex flex-col items-center justify-center px-4 py-8 bg-gradient-to-b from-amber-50 to-orange-100 dark:from-gray-900 dark:to-gray-800";
pub const CONTAINER_LG: &str = "max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 py-6";
pub const CARD: &str = "bg-white dark:bg-gray-800 rounded-2xl shadow-xl dark:shadow-[0_8px_30px_-12px_rgba(255,255,255,0.1)] border border-amber-100 dark:border-gray-700 p-6";
pub const CARD_WARM: &str = "bg-white/90 dark:bg-gray-800/90 rounded-3xl shadow-2xl border-4 border-amber-200 dark:border-gray-700 p-8 md:p-10 max-w-lg w-full text-center relative z-10 backdrop-blur-sm";
pub const CARD_TITLE: &str = "text-lg font-semibold text-gray-900 dark:text-white mb-4";
pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium text-white bg-gradient-to-r from-orange-500 to-amber-500 hover:from-orange-600 hover:to-amber-600 shadow-lg hover:shadow-xl transition-all duration-300 disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_SECONDARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium border border-gray-300 dark:border-gray-600 text-gray-900 dark:text-white hover:bg-gray-50 dark:hover:bg-gray-700 transition-colors duration-200";
pub const BUTTON_DANGER: &str = "inline-flex items-center justify-center rounded-lg bg-red-600 px-4 py-2 font-medium text-white hover:bg-red-700 transition-colors duration-200";
pub const INPUT: &str = "block w-full rounded-full border-2 border-amber-200 dark:border-gray-600 bg-white dark:bg-gray-900 py-3 px-5 text-lg text-gray-900 dark:text-white shadow-sm placeholder:text-gray-400 focus:outline-none focus:ring-4 focus:ring-amber-300";
pub const INPUT_ERROR: &str = "block w-full rounded-full border-2 border-red-400 bg-white dark:bg-gray-900 py-3 px-5 text-lg text-gray-900 dark:text-white shadow-sm focus:outline-none focus:ring-4 focus:ring-red-300";
pub const SELECT: &str = "block w-full rounded-lg border-0 bg-white dark:bg-gray-900 py-2 px-3 text-gray-900 dark:text-white shadow-sm ring-1 ring-inset ring-gray-300 dark:ring-gray-700 focus:ring-2 focus:ring-orange-500";
pub const TEXT_LABEL: &str = "block text-sm font-medium text-gray-700 dark:text-gray-300 text-left mb-2 ml-4";
pub const TEXT_SMALL: &str = "text-sm text-gray-500 dark:text-gray-400";
pub const TEXT_ERROR: &str = "text-sm text-red-500 dark:text-red-400";
pub const ALERT_SUCCESS: &str = "bg-green-50 dark:bg-green-900/50 border border-green-200 dark:border-green-800 rounded-lg p-4 text-green-700 dark:text-green-200";
pub const ALERT_ERROR: &str = "bg-red-50 dark:bg-red-900/50 border border-red-200 dark:border-red-800 rounded-lg p-4 text-red-700 dark:text-red-200";
pub const LOADING_SPINNER: &str = "animate-spin h-10 w-10 text-orange-500 dark:text-orange-400";
pub const MODAL_BACKDROP: &str = "fixed inset-0 z-50 flex items-center justify-center bg-black/60 backdrop-blur-sm";
pub const TABLE_HEAD: &str = "px-4 py-2 text-left text-xs font-semibold uppercase tracking-wider text-gray-500 dark:text-gray-400";
pub const TABLE_CELL: &str = "px-4 py-2 text-sm text-gray-700 dark:text-gray-300 whitespace-nowrap";
