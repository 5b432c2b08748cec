//! Printer adapters for rendering label documents
//!
//! Supports:
//! - Windows driver printers (via Win32 GDI)
//!
//! Label stickers need positioned text and an image, which only the driver
//! path can express; there is no raw/network backend here.

use crate::document::LabelDocument;
use crate::error::PrintResult;

#[cfg(windows)]
use tracing::{info, instrument};

/// Trait for printer adapters
#[allow(async_fn_in_trait)]
pub trait Printer {
    /// Render a label document on the printer
    async fn print(&self, doc: &LabelDocument) -> PrintResult<()>;

    /// Check if the printer is online/reachable
    async fn is_online(&self) -> bool;
}

/// Windows driver printer
///
/// Uses Win32 GDI to draw label documents through an installed printer
/// driver (e.g. an MPT-II sticker printer).
#[cfg(windows)]
pub struct WindowsPrinter {
    name: String,
    #[cfg(feature = "image")]
    logo: Option<image::RgbImage>,
}

#[cfg(windows)]
impl WindowsPrinter {
    /// Create a printer with a specific driver name
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            #[cfg(feature = "image")]
            logo: None,
        }
    }

    /// Attach the logo drawn by `DrawOp::Image` commands
    #[cfg(feature = "image")]
    pub fn with_logo(mut self, logo: image::RgbImage) -> Self {
        self.logo = Some(logo);
        self
    }

    /// Get the printer name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check if the printer is online (driver status not marked offline)
    pub fn check_online(name: &str) -> PrintResult<bool> {
        use crate::error::PrintError;
        use windows::Win32::Graphics::Printing::{
            ClosePrinter, GetPrinterW, OpenPrinterW, PRINTER_HANDLE, PRINTER_INFO_6,
            PRINTER_STATUS_OFFLINE,
        };
        use windows::core::PCWSTR;

        unsafe {
            let mut handle: PRINTER_HANDLE = PRINTER_HANDLE::default();
            let name_w = to_wide(name);

            OpenPrinterW(PCWSTR::from_raw(name_w.as_ptr()), &mut handle, None)
                .map_err(|_| PrintError::WindowsPrinter("OpenPrinterW failed".to_string()))?;

            let mut needed: u32 = 0;
            let _ = GetPrinterW(handle, 6, None, &mut needed);

            let mut online = true;
            if needed > 0 {
                let mut buf: Vec<u8> = vec![0; needed as usize];
                if GetPrinterW(handle, 6, Some(buf.as_mut_slice()), &mut needed).is_ok() {
                    let info = *(buf.as_ptr() as *const PRINTER_INFO_6);
                    online = (info.dwStatus & PRINTER_STATUS_OFFLINE) == 0;
                }
            }

            let _ = ClosePrinter(handle);
            Ok(online)
        }
    }

    /// Render a label document synchronously (for use from blocking contexts)
    pub fn print_sync(&self, doc: &LabelDocument) -> PrintResult<()> {
        self.draw_document(doc)
    }

    fn draw_document(&self, doc: &LabelDocument) -> PrintResult<()> {
        use crate::document::DrawOp;
        use crate::error::PrintError;
        use windows::Win32::Graphics::Gdi::{
            CreateDCW, CreateFontW, DEFAULT_CHARSET, DEFAULT_PITCH, DEFAULT_QUALITY, DeleteDC,
            DeleteObject, SelectObject, TextOutW,
        };
        use windows::Win32::Storage::Xps::{DOCINFOW, EndDoc, EndPage, StartDocW, StartPage};
        use windows::core::PCWSTR;

        unsafe {
            // Refuse early if the driver reports offline
            if !Self::check_online(&self.name).unwrap_or(true) {
                return Err(PrintError::Offline(self.name.clone()));
            }

            let driver_w = to_wide("WINSPOOL");
            let device_w = to_wide(&self.name);
            let hdc = CreateDCW(
                PCWSTR::from_raw(driver_w.as_ptr()),
                PCWSTR::from_raw(device_w.as_ptr()),
                PCWSTR::null(),
                None,
            );
            if hdc.is_invalid() {
                return Err(PrintError::WindowsPrinter(format!(
                    "CreateDCW failed for {}",
                    self.name
                )));
            }

            let doc_name_w = to_wide(&doc.name);
            let doc_info = DOCINFOW {
                cbSize: std::mem::size_of::<DOCINFOW>() as i32,
                lpszDocName: PCWSTR::from_raw(doc_name_w.as_ptr()),
                lpszOutput: PCWSTR::null(),
                lpszDatatype: PCWSTR::null(),
                fwType: 0,
            };

            if StartDocW(hdc, &doc_info) <= 0 {
                let _ = DeleteDC(hdc);
                return Err(PrintError::WindowsPrinter("StartDoc failed".to_string()));
            }

            if StartPage(hdc) <= 0 {
                let _ = EndDoc(hdc);
                let _ = DeleteDC(hdc);
                return Err(PrintError::WindowsPrinter("StartPage failed".to_string()));
            }

            let mut result = Ok(());
            for op in &doc.ops {
                match op {
                    DrawOp::Text { x, y, font, text } => {
                        let face_w = to_wide(font.name);
                        let hfont = CreateFontW(
                            font.height,
                            0,
                            0,
                            0,
                            font.weight,
                            0,
                            0,
                            0,
                            DEFAULT_CHARSET.0 as u32,
                            0,
                            0,
                            DEFAULT_QUALITY.0 as u32,
                            DEFAULT_PITCH.0 as u32,
                            PCWSTR::from_raw(face_w.as_ptr()),
                        );
                        let old = SelectObject(hdc, hfont.into());
                        let text_w: Vec<u16> = text.encode_utf16().collect();
                        let ok = TextOutW(hdc, *x, *y, &text_w);
                        SelectObject(hdc, old);
                        let _ = DeleteObject(hfont.into());
                        if !ok.as_bool() {
                            result =
                                Err(PrintError::WindowsPrinter("TextOut failed".to_string()));
                            break;
                        }
                    }
                    DrawOp::Image {
                        x,
                        y,
                        width,
                        height,
                    } => {
                        if let Err(e) = self.draw_logo(hdc, *x, *y, *width, *height) {
                            result = Err(e);
                            break;
                        }
                    }
                }
            }

            let _ = EndPage(hdc);
            let _ = EndDoc(hdc);
            let _ = DeleteDC(hdc);

            result
        }
    }

    #[cfg(feature = "image")]
    fn draw_logo(
        &self,
        hdc: windows::Win32::Graphics::Gdi::HDC,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> PrintResult<()> {
        use crate::error::PrintError;
        use windows::Win32::Graphics::Gdi::{
            BI_RGB, BITMAPINFO, BITMAPINFOHEADER, DIB_RGB_COLORS, HALFTONE, SRCCOPY,
            SetStretchBltMode, StretchDIBits,
        };

        let logo = self
            .logo
            .as_ref()
            .ok_or_else(|| PrintError::Image("no logo configured".to_string()))?;

        let (src_w, src_h) = (logo.width() as i32, logo.height() as i32);

        // GDI DIBs are bottom-up BGR with 4-byte aligned rows
        let stride = ((src_w * 3 + 3) & !3) as usize;
        let mut bits = vec![0u8; stride * src_h as usize];
        for row in 0..src_h as usize {
            let dst_row = &mut bits[row * stride..];
            let src_row = (src_h as usize - 1 - row) as u32;
            for col in 0..src_w as usize {
                let pixel = logo.get_pixel(col as u32, src_row);
                dst_row[col * 3] = pixel[2];
                dst_row[col * 3 + 1] = pixel[1];
                dst_row[col * 3 + 2] = pixel[0];
            }
        }

        let bmi = BITMAPINFO {
            bmiHeader: BITMAPINFOHEADER {
                biSize: std::mem::size_of::<BITMAPINFOHEADER>() as u32,
                biWidth: src_w,
                biHeight: src_h,
                biPlanes: 1,
                biBitCount: 24,
                biCompression: BI_RGB.0,
                ..Default::default()
            },
            ..Default::default()
        };

        unsafe {
            let _ = SetStretchBltMode(hdc, HALFTONE);
            let copied = StretchDIBits(
                hdc,
                x,
                y,
                width,
                height,
                0,
                0,
                src_w,
                src_h,
                Some(bits.as_ptr() as *const core::ffi::c_void),
                &bmi,
                DIB_RGB_COLORS,
                SRCCOPY,
            );
            if copied == 0 {
                return Err(PrintError::Image("StretchDIBits failed".to_string()));
            }
        }

        Ok(())
    }

    #[cfg(not(feature = "image"))]
    fn draw_logo(
        &self,
        _hdc: windows::Win32::Graphics::Gdi::HDC,
        _x: i32,
        _y: i32,
        _width: i32,
        _height: i32,
    ) -> PrintResult<()> {
        Err(crate::error::PrintError::Image(
            "image feature disabled".to_string(),
        ))
    }
}

#[cfg(windows)]
impl Printer for WindowsPrinter {
    #[instrument(skip(self, doc), fields(printer = %self.name, ops = doc.ops.len()))]
    async fn print(&self, doc: &LabelDocument) -> PrintResult<()> {
        use crate::error::PrintError;

        // GDI printing is synchronous, run in blocking task
        let printer = WindowsPrinter {
            name: self.name.clone(),
            #[cfg(feature = "image")]
            logo: self.logo.clone(),
        };
        let doc = doc.clone();

        tokio::task::spawn_blocking(move || printer.draw_document(&doc))
            .await
            .map_err(|e| PrintError::WindowsPrinter(format!("Task join failed: {}", e)))??;

        info!("Label document sent to driver");
        Ok(())
    }

    async fn is_online(&self) -> bool {
        Self::check_online(&self.name).unwrap_or(false)
    }
}

#[cfg(windows)]
fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}
