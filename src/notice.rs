// 📢 Static disclosure content: banner, important notice, footer

use chrono::{Datelike, Local};

pub const ORGANIZATION: &str = "PEMUDA PEDULI TRANSPARANSI DESA (PPTD)";
pub const MOVEMENT: &str = "Gerakan Masyarakat Sipil";
pub const SUBTITLE: &str = "Kawal Data BLT Kesra Desa Komis, Kec. Kedungdung";

/// Shown in the header on every screen.
pub const UNOFFICIAL_BANNER: &str = "Bukan situs resmi Pemerintah Desa atau Kabupaten";

pub const NOTICE_TITLE: &str = "CATATAN PENTING";
pub const NOTICE_INTRO: &str = "Transparansi data adalah prioritas kami.";

/// (heading, body) pairs of the important notice
pub const NOTICE_ITEMS: [(&str, &str); 2] = [
    (
        "Bagi Masyarakat:",
        "Jika Anda merasa berhak namun belum menerima haknya atau belum tercantum dalam daftar ini, \
         silahkan melakukan konfirmasi langsung ke Pemerintah Desa Komis.",
    ),
    (
        "Pelaporan Pelanggaran:",
        "Jika ditemukan adanya nama fiktif atau data yang tidak sesuai, \
         silahkan melaporkan hal tersebut kepada Pihak yang Berwajib.",
    ),
];

pub const PRIVACY_NOTE: &str = "Privasi Terlindungi: Nomor KK disamarkan sesuai UU PDP";

pub const FOOTER_ABOUT: &str = "Inisiatif independen untuk mewujudkan transparansi dan keadilan data \
    bantuan sosial di Desa Komis. Data bersumber dari hasil investigasi dan dokumen publik.";

pub const FOOTER_DISCLAIMER: &str = "Disclaimer: Aplikasi ini tidak dikelola oleh Pemerintah Desa Komis \
    maupun Pemerintah Kabupaten Sampang.";

pub fn copyright_line(year: i32) -> String {
    format!("© {} PPTD. Hak Cipta Dilindungi.", year)
}

pub fn current_copyright_line() -> String {
    copyright_line(Local::now().year())
}
