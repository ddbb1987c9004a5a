//! Reference palettes exported from matplotlib.
//!
//! Each entry samples the matplotlib colormap at evenly spaced points.
//! The number of samples is not fixed: any count in `2 ..= 256` is
//! accepted by the registry, so a table can be regenerated at another
//! resolution without touching the code that consumes it.

use super::ty::PaletteData;

/// All reference palettes, sorted by name.
pub(crate) const ALL: &[PaletteData] = &[
    PaletteData { name: "accent", rgb: &[
        [127, 201, 127], [154, 189, 164], [182, 177, 201], [210, 179, 187],
        [237, 187, 152], [253, 204, 137], [254, 232, 146], [240, 244, 154],
        [152, 179, 164], [65, 114, 174], [128, 66, 156], [208, 19, 135],
        [226, 26, 98], [205, 65, 53], [177, 92, 34], [102, 102, 102],
    ] },
    PaletteData { name: "afmhot", rgb: &[
        [0, 0, 0], [32, 0, 0], [64, 0, 0], [96, 0, 0],
        [128, 0, 0], [160, 32, 0], [192, 64, 0], [224, 96, 0],
        [255, 128, 0], [255, 160, 32], [255, 192, 65], [255, 224, 97],
        [255, 255, 129], [255, 255, 161], [255, 255, 193], [255, 255, 255],
    ] },
    PaletteData { name: "autumn", rgb: &[
        [255, 0, 0], [255, 16, 0], [255, 32, 0], [255, 48, 0],
        [255, 64, 0], [255, 80, 0], [255, 96, 0], [255, 112, 0],
        [255, 128, 0], [255, 144, 0], [255, 160, 0], [255, 176, 0],
        [255, 192, 0], [255, 208, 0], [255, 224, 0], [255, 255, 0],
    ] },
    PaletteData { name: "binary", rgb: &[
        [255, 255, 255], [239, 239, 239], [223, 223, 223], [207, 207, 207],
        [191, 191, 191], [175, 175, 175], [159, 159, 159], [143, 143, 143],
        [127, 127, 127], [111, 111, 111], [95, 95, 95], [79, 79, 79],
        [63, 63, 63], [47, 47, 47], [31, 31, 31], [0, 0, 0],
    ] },
    PaletteData { name: "blues", rgb: &[
        [247, 251, 255], [234, 242, 250], [221, 234, 246], [209, 226, 242],
        [197, 218, 238], [177, 210, 231], [157, 201, 224], [131, 187, 219],
        [106, 173, 213], [85, 159, 205], [65, 145, 197], [48, 128, 189],
        [32, 112, 180], [19, 96, 167], [8, 80, 154], [8, 48, 107],
    ] },
    PaletteData { name: "bone", rgb: &[
        [0, 0, 0], [14, 13, 19], [28, 27, 38], [42, 41, 58],
        [56, 55, 77], [70, 69, 97], [84, 84, 115], [98, 104, 129],
        [112, 123, 143], [126, 142, 157], [140, 161, 171], [154, 181, 185],
        [168, 199, 199], [190, 213, 213], [212, 227, 227], [255, 255, 255],
    ] },
    PaletteData { name: "brbg", rgb: &[
        [84, 48, 5], [119, 68, 8], [153, 93, 18], [185, 123, 40],
        [207, 162, 85], [226, 199, 134], [240, 223, 178], [245, 237, 214],
        [244, 244, 244], [215, 237, 234], [179, 226, 219], [134, 207, 196],
        [88, 176, 166], [44, 143, 135], [12, 112, 104], [0, 60, 48],
    ] },
    PaletteData { name: "brg", rgb: &[
        [0, 0, 255], [32, 0, 223], [64, 0, 191], [96, 0, 159],
        [128, 0, 127], [160, 0, 95], [192, 0, 63], [224, 0, 31],
        [254, 1, 0], [222, 33, 0], [190, 65, 0], [158, 97, 0],
        [126, 129, 0], [94, 161, 0], [62, 193, 0], [0, 255, 0],
    ] },
    PaletteData { name: "bugn", rgb: &[
        [247, 252, 253], [237, 248, 250], [228, 244, 248], [216, 240, 239],
        [203, 235, 229], [178, 225, 215], [152, 215, 200], [126, 204, 181],
        [101, 193, 163], [82, 183, 140], [64, 173, 117], [49, 155, 92],
        [34, 138, 68], [16, 123, 55], [0, 107, 43], [0, 68, 27],
    ] },
    PaletteData { name: "bupu", rgb: &[
        [247, 252, 253], [235, 243, 248], [223, 235, 243], [207, 223, 236],
        [190, 210, 229], [174, 199, 223], [157, 187, 217], [148, 168, 207],
        [140, 149, 197], [140, 127, 187], [139, 106, 176], [137, 85, 166],
        [135, 63, 156], [132, 38, 139], [127, 14, 122], [77, 0, 75],
    ] },
    PaletteData { name: "bwr", rgb: &[
        [0, 0, 255], [32, 32, 255], [64, 64, 255], [96, 96, 255],
        [128, 128, 255], [160, 160, 255], [192, 192, 255], [224, 224, 255],
        [255, 254, 254], [255, 222, 222], [255, 190, 190], [255, 158, 158],
        [255, 126, 126], [255, 94, 94], [255, 62, 62], [255, 0, 0],
    ] },
    PaletteData { name: "cmrmap", rgb: &[
        [0, 0, 0], [19, 19, 64], [38, 38, 127], [57, 38, 159],
        [77, 38, 190], [115, 44, 158], [154, 51, 126], [205, 57, 81],
        [254, 64, 37], [241, 96, 18], [229, 128, 0], [229, 160, 13],
        [229, 192, 27], [229, 211, 79], [230, 230, 131], [255, 255, 255],
    ] },
    PaletteData { name: "cool", rgb: &[
        [0, 255, 255], [16, 239, 255], [32, 223, 255], [48, 207, 255],
        [64, 191, 255], [80, 175, 255], [96, 159, 255], [112, 143, 255],
        [128, 127, 255], [144, 111, 255], [160, 95, 255], [176, 79, 255],
        [192, 63, 255], [208, 47, 255], [224, 31, 255], [255, 0, 255],
    ] },
    PaletteData { name: "coolwarm", rgb: &[
        [58, 76, 192], [77, 103, 215], [97, 130, 234], [119, 154, 246],
        [141, 175, 253], [163, 193, 254], [184, 207, 248], [204, 216, 237],
        [221, 220, 219], [236, 210, 196], [244, 195, 171], [247, 176, 146],
        [243, 152, 121], [234, 125, 97], [220, 94, 75], [179, 3, 38],
    ] },
    PaletteData { name: "copper", rgb: &[
        [0, 0, 0], [19, 12, 7], [39, 24, 15], [59, 37, 23],
        [79, 49, 31], [98, 62, 39], [118, 74, 47], [138, 87, 55],
        [158, 99, 63], [177, 112, 71], [197, 124, 79], [217, 137, 87],
        [237, 149, 95], [255, 162, 103], [255, 174, 111], [255, 199, 126],
    ] },
    PaletteData { name: "cubehelix", rgb: &[
        [0, 0, 0], [20, 11, 29], [26, 29, 59], [22, 55, 76],
        [21, 83, 75], [35, 106, 61], [67, 119, 48], [113, 122, 50],
        [161, 121, 74], [196, 122, 117], [211, 131, 169], [208, 152, 212],
        [198, 180, 237], [193, 208, 243], [203, 231, 239], [255, 255, 255],
    ] },
    PaletteData { name: "dark2", rgb: &[
        [27, 158, 119], [110, 130, 67], [193, 102, 16], [185, 100, 58],
        [141, 107, 135], [139, 98, 170], [189, 66, 152], [221, 50, 129],
        [164, 105, 82], [108, 160, 35], [152, 167, 19], [208, 170, 6],
        [212, 156, 9], [184, 133, 21], [156, 115, 39], [102, 102, 102],
    ] },
    PaletteData { name: "flag", rgb: &[
        [255, 0, 0], [252, 0, 0], [241, 0, 0], [229, 0, 0],
        [217, 0, 0], [204, 0, 0], [191, 0, 0], [178, 0, 0],
        [164, 0, 0], [150, 0, 0], [136, 0, 0], [122, 0, 0],
        [108, 0, 0], [94, 0, 0], [80, 0, 0], [0, 0, 0],
    ] },
    PaletteData { name: "gist_earth", rgb: &[
        [0, 0, 0], [10, 20, 117], [21, 56, 120], [31, 88, 123],
        [42, 115, 126], [51, 132, 117], [59, 141, 98], [66, 151, 78],
        [93, 160, 75], [126, 167, 83], [153, 174, 88], [179, 181, 93],
        [188, 170, 98], [200, 166, 120], [218, 182, 159], [253, 250, 250],
    ] },
    PaletteData { name: "gist_gray", rgb: &[
        [0, 0, 0], [16, 16, 16], [32, 32, 32], [48, 48, 48],
        [64, 64, 64], [80, 80, 80], [96, 96, 96], [112, 112, 112],
        [128, 128, 128], [144, 144, 144], [160, 160, 160], [176, 176, 176],
        [192, 192, 192], [208, 208, 208], [224, 224, 224], [255, 255, 255],
    ] },
    PaletteData { name: "gist_heat", rgb: &[
        [0, 0, 0], [24, 0, 0], [48, 0, 0], [72, 0, 0],
        [96, 0, 0], [120, 0, 0], [144, 0, 0], [168, 0, 0],
        [192, 0, 0], [216, 32, 0], [240, 65, 0], [255, 97, 0],
        [255, 129, 2], [255, 161, 66], [255, 193, 131], [255, 255, 255],
    ] },
    PaletteData { name: "gist_ncar", rgb: &[
        [0, 0, 128], [0, 74, 55], [0, 70, 255], [0, 224, 255],
        [0, 250, 176], [6, 254, 20], [103, 212, 0], [145, 255, 23],
        [218, 255, 31], [255, 227, 0], [255, 188, 12], [255, 66, 0],
        [255, 0, 70], [213, 20, 255], [205, 97, 244], [254, 247, 254],
    ] },
    PaletteData { name: "gist_rainbow", rgb: &[
        [255, 0, 40], [255, 45, 0], [255, 131, 0], [255, 218, 0],
        [205, 255, 0], [118, 255, 0], [32, 255, 0], [0, 255, 53],
        [0, 255, 139], [0, 255, 225], [0, 197, 255], [0, 110, 255],
        [0, 23, 255], [63, 0, 255], [150, 0, 255], [255, 0, 191],
    ] },
    PaletteData { name: "gist_stern", rgb: &[
        [0, 0, 0], [244, 16, 32], [165, 32, 64], [85, 48, 96],
        [64, 64, 128], [80, 80, 160], [96, 96, 192], [112, 112, 224],
        [128, 128, 252], [144, 144, 184], [160, 160, 116], [176, 176, 48],
        [192, 192, 17], [208, 208, 77], [224, 224, 138], [255, 255, 255],
    ] },
    PaletteData { name: "gist_yarg", rgb: &[
        [255, 255, 255], [239, 239, 239], [223, 223, 223], [207, 207, 207],
        [191, 191, 191], [175, 175, 175], [159, 159, 159], [143, 143, 143],
        [127, 127, 127], [111, 111, 111], [95, 95, 95], [79, 79, 79],
        [63, 63, 63], [47, 47, 47], [31, 31, 31], [0, 0, 0],
    ] },
    PaletteData { name: "gnbu", rgb: &[
        [247, 252, 240], [235, 247, 229], [223, 242, 218], [213, 238, 207],
        [203, 234, 196], [185, 227, 188], [167, 220, 181], [144, 212, 188],
        [122, 203, 196], [99, 191, 203], [77, 178, 210], [59, 158, 200],
        [42, 139, 189], [24, 121, 180], [8, 102, 170], [8, 64, 129],
    ] },
    PaletteData { name: "gnuplot", rgb: &[
        [0, 0, 0], [63, 0, 97], [90, 0, 180], [110, 1, 236],
        [127, 4, 254], [142, 7, 234], [156, 13, 178], [168, 21, 95],
        [180, 32, 0], [191, 45, 0], [201, 62, 0], [211, 83, 0],
        [221, 108, 0], [230, 138, 0], [238, 172, 0], [255, 255, 0],
    ] },
    PaletteData { name: "gnuplot2", rgb: &[
        [0, 0, 0], [0, 0, 64], [0, 0, 128], [0, 0, 192],
        [0, 0, 255], [50, 0, 255], [100, 0, 255], [150, 9, 245],
        [200, 41, 213], [250, 73, 181], [255, 105, 149], [255, 137, 117],
        [255, 169, 85], [255, 201, 53], [255, 233, 21], [255, 255, 255],
    ] },
    PaletteData { name: "gray", rgb: &[
        [0, 0, 0], [16, 16, 16], [32, 32, 32], [48, 48, 48],
        [64, 64, 64], [80, 80, 80], [96, 96, 96], [112, 112, 112],
        [128, 128, 128], [144, 144, 144], [160, 160, 160], [176, 176, 176],
        [192, 192, 192], [208, 208, 208], [224, 224, 224], [255, 255, 255],
    ] },
    PaletteData { name: "greens", rgb: &[
        [247, 252, 245], [237, 248, 234], [228, 244, 223], [213, 238, 207],
        [198, 232, 191], [179, 224, 173], [160, 216, 154], [137, 206, 135],
        [115, 195, 117], [89, 183, 105], [64, 170, 92], [49, 154, 80],
        [34, 138, 68], [16, 123, 55], [0, 107, 43], [0, 68, 27],
    ] },
    PaletteData { name: "greys", rgb: &[
        [255, 255, 255], [247, 247, 247], [239, 239, 239], [228, 228, 228],
        [216, 216, 216], [202, 202, 202], [188, 188, 188], [168, 168, 168],
        [149, 149, 149], [131, 131, 131], [114, 114, 114], [97, 97, 97],
        [80, 80, 80], [58, 58, 58], [35, 35, 35], [0, 0, 0],
    ] },
    PaletteData { name: "hot", rgb: &[
        [10, 0, 0], [52, 0, 0], [94, 0, 0], [136, 0, 0],
        [178, 0, 0], [220, 0, 0], [255, 7, 0], [255, 49, 0],
        [255, 91, 0], [255, 133, 0], [255, 175, 0], [255, 217, 0],
        [255, 255, 6], [255, 255, 69], [255, 255, 132], [255, 255, 255],
    ] },
    PaletteData { name: "hsv", rgb: &[
        [255, 0, 0], [255, 94, 0], [255, 189, 0], [226, 255, 0],
        [131, 255, 0], [37, 255, 0], [0, 255, 57], [0, 255, 151],
        [0, 255, 245], [0, 169, 255], [0, 75, 255], [19, 0, 255],
        [113, 0, 255], [208, 0, 255], [255, 0, 207], [255, 0, 23],
    ] },
    PaletteData { name: "inferno", rgb: &[
        [0, 0, 3], [10, 7, 35], [32, 12, 74], [60, 9, 101],
        [87, 15, 109], [112, 25, 110], [137, 34, 105], [163, 43, 97],
        [187, 55, 84], [209, 70, 67], [228, 90, 49], [241, 114, 29],
        [249, 142, 8], [251, 172, 16], [248, 203, 52], [252, 254, 164],
    ] },
    PaletteData { name: "jet", rgb: &[
        [0, 0, 127], [0, 0, 200], [0, 0, 255], [0, 64, 255],
        [0, 128, 255], [0, 192, 255], [21, 255, 225], [73, 255, 173],
        [124, 255, 121], [176, 255, 70], [228, 255, 18], [255, 207, 0],
        [255, 148, 0], [255, 89, 0], [255, 29, 0], [127, 0, 0],
    ] },
    PaletteData { name: "magma", rgb: &[
        [0, 0, 3], [10, 7, 34], [28, 16, 70], [53, 15, 106],
        [80, 18, 123], [105, 28, 128], [130, 37, 129], [156, 46, 127],
        [182, 54, 121], [208, 65, 111], [230, 81, 98], [245, 106, 91],
        [251, 136, 97], [254, 166, 113], [254, 196, 136], [251, 252, 191],
    ] },
    PaletteData { name: "nipy_spectral", rgb: &[
        [0, 0, 0], [123, 0, 140], [66, 0, 161], [0, 0, 209],
        [0, 119, 221], [0, 157, 207], [0, 170, 151], [0, 156, 29],
        [0, 188, 0], [0, 231, 0], [102, 255, 0], [227, 241, 0],
        [255, 201, 0], [255, 105, 0], [235, 0, 0], [204, 204, 204],
    ] },
    PaletteData { name: "ocean", rgb: &[
        [0, 127, 0], [0, 103, 16], [0, 79, 32], [0, 55, 48],
        [0, 31, 64], [0, 7, 80], [0, 16, 96], [0, 40, 112],
        [0, 64, 128], [0, 88, 144], [0, 112, 160], [17, 136, 176],
        [65, 160, 192], [114, 184, 208], [162, 208, 224], [255, 255, 255],
    ] },
    PaletteData { name: "oranges", rgb: &[
        [255, 245, 235], [254, 237, 220], [253, 229, 205], [253, 218, 183],
        [253, 207, 161], [253, 190, 133], [253, 173, 106], [253, 157, 82],
        [252, 140, 59], [246, 122, 38], [240, 104, 18], [228, 87, 9],
        [215, 71, 1], [190, 62, 2], [164, 53, 3], [127, 39, 4],
    ] },
    PaletteData { name: "orrd", rgb: &[
        [255, 247, 236], [254, 239, 217], [253, 231, 199], [253, 221, 178],
        [253, 211, 157], [253, 199, 144], [252, 186, 131], [252, 163, 109],
        [251, 140, 88], [245, 120, 80], [238, 99, 71], [226, 73, 50],
        [214, 46, 30], [196, 22, 14], [177, 0, 0], [127, 0, 0],
    ] },
    PaletteData { name: "paired", rgb: &[
        [166, 206, 227], [72, 146, 194], [86, 159, 164], [169, 218, 131],
        [81, 175, 66], [141, 157, 93], [247, 135, 135], [231, 47, 49],
        [240, 112, 71], [253, 177, 87], [254, 133, 10], [223, 157, 126],
        [174, 144, 197], [108, 64, 155], [204, 189, 153], [177, 89, 40],
    ] },
    PaletteData { name: "pastel1", rgb: &[
        [251, 180, 174], [214, 192, 200], [179, 205, 226], [191, 220, 211],
        [204, 234, 197], [213, 218, 212], [222, 203, 227], [238, 210, 196],
        [254, 217, 166], [254, 236, 185], [254, 254, 203], [241, 234, 196],
        [229, 216, 190], [241, 217, 213], [252, 218, 236], [242, 242, 242],
    ] },
    PaletteData { name: "pastel2", rgb: &[
        [179, 226, 205], [211, 216, 190], [244, 207, 176], [237, 207, 191],
        [215, 211, 217], [211, 210, 231], [229, 206, 229], [242, 205, 225],
        [236, 224, 214], [230, 242, 202], [239, 243, 190], [250, 242, 178],
        [251, 237, 182], [245, 230, 195], [235, 222, 204], [204, 204, 204],
    ] },
    PaletteData { name: "pink", rgb: &[
        [30, 0, 0], [84, 52, 52], [116, 73, 73], [140, 90, 90],
        [161, 104, 104], [179, 116, 116], [194, 130, 127], [201, 152, 137],
        [208, 171, 147], [214, 189, 156], [221, 205, 164], [227, 220, 172],
        [233, 233, 182], [238, 238, 203], [244, 244, 222], [255, 255, 255],
    ] },
    PaletteData { name: "piyg", rgb: &[
        [142, 1, 82], [176, 17, 108], [203, 50, 137], [219, 108, 168],
        [231, 151, 196], [242, 187, 220], [250, 214, 234], [250, 233, 242],
        [246, 246, 246], [236, 245, 221], [217, 239, 187], [188, 226, 141],
        [153, 205, 97], [119, 181, 59], [87, 155, 39], [39, 100, 25],
    ] },
    PaletteData { name: "plasma", rgb: &[
        [12, 7, 134], [49, 4, 150], [76, 2, 161], [101, 0, 167],
        [126, 3, 167], [149, 17, 161], [169, 35, 149], [187, 53, 134],
        [203, 71, 119], [217, 89, 105], [229, 108, 91], [240, 128, 77],
        [248, 149, 64], [252, 172, 50], [253, 196, 39], [239, 248, 33],
    ] },
    PaletteData { name: "prgn", rgb: &[
        [64, 0, 75], [97, 26, 110], [126, 59, 141], [148, 103, 166],
        [173, 139, 189], [199, 171, 210], [222, 200, 226], [237, 225, 237],
        [246, 246, 246], [227, 242, 223], [203, 234, 197], [171, 221, 165],
        [125, 195, 126], [80, 165, 90], [40, 131, 64], [0, 68, 27],
    ] },
    PaletteData { name: "prism", rgb: &[
        [255, 0, 0], [0, 47, 232], [245, 255, 0], [255, 0, 57],
        [0, 86, 195], [255, 241, 0], [240, 0, 112], [0, 126, 150],
        [255, 215, 0], [202, 0, 163], [0, 163, 98], [255, 184, 0],
        [162, 0, 206], [16, 197, 42], [255, 148, 0], [84, 254, 0],
    ] },
    PaletteData { name: "pubu", rgb: &[
        [255, 247, 251], [245, 238, 246], [235, 230, 241], [221, 219, 235],
        [207, 208, 229], [186, 198, 224], [165, 188, 218], [140, 178, 212],
        [115, 168, 206], [83, 156, 199], [53, 143, 191], [28, 127, 183],
        [4, 111, 175], [4, 100, 157], [3, 89, 139], [2, 56, 88],
    ] },
    PaletteData { name: "pubugn", rgb: &[
        [255, 247, 251], [245, 236, 245], [235, 225, 239], [221, 217, 234],
        [207, 208, 229], [186, 198, 224], [165, 188, 218], [133, 178, 212],
        [102, 168, 206], [77, 156, 199], [52, 143, 190], [26, 136, 163],
        [1, 128, 136], [1, 117, 112], [1, 106, 88], [1, 70, 54],
    ] },
    PaletteData { name: "puor", rgb: &[
        [127, 59, 8], [159, 77, 6], [190, 98, 9], [218, 125, 18],
        [238, 157, 60], [253, 189, 110], [253, 214, 162], [251, 233, 207],
        [246, 246, 246], [226, 228, 239], [205, 205, 228], [181, 175, 212],
        [151, 141, 189], [121, 103, 166], [93, 55, 143], [45, 0, 75],
    ] },
    PaletteData { name: "purd", rgb: &[
        [247, 244, 249], [238, 234, 243], [230, 224, 238], [221, 204, 228],
        [211, 184, 217], [206, 166, 208], [201, 147, 198], [212, 123, 187],
        [223, 100, 175], [227, 69, 156], [230, 40, 136], [217, 29, 110],
        [204, 17, 85], [177, 8, 76], [150, 0, 66], [103, 0, 31],
    ] },
    PaletteData { name: "purples", rgb: &[
        [252, 251, 253], [245, 243, 248], [238, 236, 244], [228, 227, 239],
        [217, 217, 234], [202, 203, 227], [187, 188, 219], [172, 171, 209],
        [157, 153, 199], [142, 138, 192], [127, 124, 185], [116, 102, 174],
        [105, 80, 162], [94, 58, 152], [83, 37, 142], [63, 0, 125],
    ] },
    PaletteData { name: "rainbow", rgb: &[
        [127, 0, 255], [95, 49, 253], [63, 97, 250], [31, 142, 243],
        [0, 180, 235], [32, 212, 224], [64, 236, 211], [96, 250, 196],
        [128, 254, 179], [160, 249, 161], [192, 234, 140], [224, 210, 119],
        [255, 178, 96], [255, 139, 72], [255, 95, 48], [255, 0, 0],
    ] },
    PaletteData { name: "rdbu", rgb: &[
        [103, 0, 31], [150, 15, 38], [187, 42, 51], [209, 87, 73],
        [229, 131, 104], [245, 172, 139], [250, 206, 182], [250, 229, 217],
        [246, 246, 246], [222, 235, 242], [191, 220, 235], [152, 200, 223],
        [104, 170, 207], [61, 139, 191], [40, 111, 176], [5, 48, 97],
    ] },
    PaletteData { name: "rdgy", rgb: &[
        [103, 0, 31], [150, 15, 38], [187, 42, 51], [209, 87, 73],
        [229, 131, 104], [245, 172, 139], [250, 206, 182], [253, 233, 220],
        [254, 254, 254], [234, 234, 234], [213, 213, 213], [189, 189, 189],
        [159, 159, 159], [125, 125, 125], [89, 89, 89], [26, 26, 26],
    ] },
    PaletteData { name: "rdpu", rgb: &[
        [255, 247, 243], [253, 235, 231], [252, 223, 220], [252, 210, 206],
        [251, 196, 191], [250, 177, 186], [249, 158, 180], [248, 130, 170],
        [246, 103, 160], [233, 77, 155], [220, 51, 150], [196, 25, 137],
        [172, 1, 125], [146, 1, 122], [120, 0, 118], [73, 0, 106],
    ] },
    PaletteData { name: "rdylbu", rgb: &[
        [165, 0, 38], [196, 30, 38], [222, 63, 46], [240, 101, 63],
        [248, 142, 82], [253, 180, 103], [253, 212, 132], [254, 236, 162],
        [254, 254, 192], [234, 247, 227], [209, 235, 243], [176, 219, 234],
        [141, 193, 220], [108, 164, 204], [79, 129, 186], [49, 54, 149],
    ] },
    PaletteData { name: "rdylgn", rgb: &[
        [165, 0, 38], [196, 30, 38], [222, 63, 46], [240, 101, 63],
        [248, 142, 82], [253, 180, 102], [253, 212, 129], [254, 236, 159],
        [254, 254, 189], [230, 244, 157], [203, 232, 129], [171, 219, 109],
        [132, 202, 102], [90, 183, 96], [42, 159, 84], [0, 104, 55],
    ] },
    PaletteData { name: "reds", rgb: &[
        [255, 245, 240], [254, 234, 224], [253, 223, 209], [252, 205, 185],
        [252, 186, 160], [252, 166, 137], [251, 145, 113], [251, 125, 93],
        [250, 105, 73], [244, 81, 58], [238, 58, 43], [220, 40, 36],
        [202, 23, 28], [183, 19, 24], [163, 14, 20], [103, 0, 13],
    ] },
    PaletteData { name: "seismic", rgb: &[
        [0, 0, 76], [0, 0, 121], [0, 0, 166], [0, 0, 210],
        [1, 1, 255], [65, 65, 255], [129, 129, 255], [193, 193, 255],
        [255, 253, 253], [255, 189, 189], [255, 125, 125], [255, 61, 61],
        [253, 0, 0], [221, 0, 0], [189, 0, 0], [127, 0, 0],
    ] },
    PaletteData { name: "set1", rgb: &[
        [228, 26, 28], [141, 76, 106], [55, 126, 183], [66, 150, 128],
        [77, 174, 74], [115, 125, 119], [153, 78, 161], [204, 103, 79],
        [255, 129, 0], [255, 193, 26], [253, 251, 50], [208, 166, 45],
        [167, 87, 43], [208, 108, 119], [244, 129, 189], [153, 153, 153],
    ] },
    PaletteData { name: "set2", rgb: &[
        [102, 194, 165], [167, 170, 135], [233, 147, 106], [216, 147, 131],
        [167, 155, 177], [158, 155, 201], [198, 146, 197], [226, 143, 186],
        [197, 178, 137], [169, 212, 89], [200, 216, 69], [239, 216, 53],
        [247, 211, 74], [236, 202, 118], [221, 193, 152], [179, 179, 179],
    ] },
    PaletteData { name: "set3", rgb: &[
        [141, 211, 199], [219, 241, 185], [230, 228, 193], [194, 181, 210],
        [236, 141, 138], [195, 150, 157], [145, 177, 195], [231, 179, 117],
        [214, 201, 101], [194, 218, 131], [244, 206, 216], [231, 212, 221],
        [208, 191, 209], [188, 130, 189], [198, 198, 194], [255, 237, 111],
    ] },
    PaletteData { name: "spectral", rgb: &[
        [0, 0, 0], [123, 0, 140], [66, 0, 161], [0, 0, 209],
        [0, 119, 221], [0, 157, 207], [0, 170, 151], [0, 156, 29],
        [0, 188, 0], [0, 231, 0], [102, 255, 0], [227, 241, 0],
        [255, 201, 0], [255, 105, 0], [235, 0, 0], [204, 204, 204],
    ] },
    PaletteData { name: "spring", rgb: &[
        [255, 0, 255], [255, 16, 239], [255, 32, 223], [255, 48, 207],
        [255, 64, 191], [255, 80, 175], [255, 96, 159], [255, 112, 143],
        [255, 128, 127], [255, 144, 111], [255, 160, 95], [255, 176, 79],
        [255, 192, 63], [255, 208, 47], [255, 224, 31], [255, 255, 0],
    ] },
    PaletteData { name: "summer", rgb: &[
        [0, 127, 102], [16, 135, 102], [32, 143, 102], [48, 151, 102],
        [64, 159, 102], [80, 167, 102], [96, 175, 102], [112, 183, 102],
        [128, 191, 102], [144, 199, 102], [160, 207, 102], [176, 215, 102],
        [192, 223, 102], [208, 231, 102], [224, 239, 102], [255, 255, 102],
    ] },
    PaletteData { name: "terrain", rgb: &[
        [51, 51, 153], [29, 93, 195], [8, 136, 238], [0, 172, 196],
        [1, 204, 102], [65, 217, 115], [129, 229, 127], [193, 242, 140],
        [254, 253, 152], [222, 212, 135], [190, 171, 117], [158, 130, 100],
        [129, 93, 86], [161, 134, 129], [193, 175, 171], [255, 255, 255],
    ] },
    PaletteData { name: "viridis", rgb: &[
        [68, 1, 84], [71, 24, 106], [71, 44, 123], [66, 64, 133],
        [58, 82, 139], [50, 98, 141], [44, 114, 142], [38, 129, 142],
        [32, 144, 140], [30, 159, 136], [40, 174, 127], [62, 188, 115],
        [94, 201, 97], [131, 211, 75], [173, 220, 48], [253, 231, 36],
    ] },
    PaletteData { name: "winter", rgb: &[
        [0, 0, 255], [0, 16, 247], [0, 32, 239], [0, 48, 231],
        [0, 64, 223], [0, 80, 215], [0, 96, 207], [0, 112, 199],
        [0, 128, 191], [0, 144, 183], [0, 160, 175], [0, 176, 167],
        [0, 192, 159], [0, 208, 151], [0, 224, 143], [0, 255, 127],
    ] },
    PaletteData { name: "wistia", rgb: &[
        [228, 255, 122], [234, 249, 97], [241, 243, 73], [248, 237, 49],
        [255, 231, 25], [255, 221, 19], [255, 210, 12], [255, 199, 6],
        [255, 188, 0], [255, 181, 0], [255, 174, 0], [255, 166, 0],
        [254, 159, 0], [254, 151, 0], [253, 143, 0], [252, 127, 0],
    ] },
    PaletteData { name: "ylgn", rgb: &[
        [255, 255, 229], [250, 253, 206], [246, 251, 184], [231, 245, 173],
        [216, 239, 162], [194, 230, 152], [172, 220, 141], [145, 209, 131],
        [119, 197, 120], [91, 184, 106], [64, 170, 92], [49, 150, 79],
        [34, 131, 66], [16, 117, 60], [0, 103, 54], [0, 69, 41],
    ] },
    PaletteData { name: "ylgnbu", rgb: &[
        [255, 255, 217], [245, 251, 196], [236, 247, 177], [217, 240, 178],
        [198, 232, 180], [162, 218, 183], [126, 204, 187], [95, 193, 191],
        [64, 181, 195], [46, 162, 193], [29, 144, 191], [31, 118, 179],
        [34, 93, 167], [35, 71, 157], [36, 51, 146], [8, 29, 88],
    ] },
    PaletteData { name: "ylorbr", rgb: &[
        [255, 255, 229], [255, 250, 208], [254, 246, 187], [254, 236, 166],
        [254, 226, 144], [254, 211, 111], [254, 195, 78], [254, 173, 59],
        [253, 152, 40], [244, 131, 30], [235, 111, 19], [219, 93, 10],
        [202, 75, 2], [177, 63, 3], [151, 51, 4], [102, 37, 6],
    ] },
    PaletteData { name: "ylorrd", rgb: &[
        [255, 255, 204], [255, 245, 181], [254, 236, 159], [254, 226, 138],
        [254, 216, 117], [254, 197, 96], [253, 177, 75], [253, 158, 67],
        [252, 140, 59], [252, 108, 50], [251, 76, 41], [238, 50, 34],
        [226, 25, 28], [207, 12, 33], [187, 0, 38], [128, 0, 38],
    ] },
];
